use crate::app::{use_app_config, use_data_source};
use crate::domain::a003_finance::ui::details::DisbursementDetails;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::dialogs::SuccessDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::Modal;
use crate::shared::number_format::format_rupiah;
use contracts::domain::a003_finance::aggregate::FinanceRecord;
use contracts::shared::data::InMemoryRepository;
use contracts::shared::search::filter_list;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn FinanceList() -> impl IntoView {
    let source = use_data_source();
    let repo = RwSignal::new(InMemoryRepository::new(source.finance_records()));
    let directory = StoredValue::new(source.merchant_directory());
    let filter = RwSignal::new(String::new());
    let show_manual = RwSignal::new(false);
    let show_success = RwSignal::new(false);
    let prefix = StoredValue::new(use_app_config().locale.currency_prefix);

    let rows = move || repo.with(|repo| filter_list(repo.records(), &filter.get()));

    let on_saved = Callback::new(move |_: FinanceRecord| {
        show_manual.set(false);
        show_success.set(true);
    });

    view! {
        <div class="page">
            <PageHeader title="Kelola Keuangan" subtitle="Dashboard / Kelola Keuangan">
                {()}
            </PageHeader>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Request Pencairan dana"</h3>
                    <div class="card__actions">
                        <SearchInput
                            value=filter
                            on_change=Callback::new(move |v: String| filter.set(v))
                            placeholder="Cari Pencairan"
                        />
                        <button class="button button--primary" on:click=move |_| show_manual.set(true)>
                            "Tambah Pencairan Manual"
                        </button>
                        <button class="button button--secondary">
                            "Request Pencairan Dana"
                            {icon("chevron-down")}
                        </button>
                    </div>
                </div>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID Pencairan"</th>
                                <th>"UMKM"</th>
                                <th>"Total Produk"</th>
                                <th>"Saldo"</th>
                                <th>"Pencairan"</th>
                                <th>"Bank"</th>
                                <th>"Rekening"</th>
                                <th>"Tanggal"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                rows()
                                    .into_iter()
                                    .map(|record| {
                                        let (balance, disbursement) = prefix.with_value(|p| {
                                            (
                                                format_rupiah(record.balance, p),
                                                format_rupiah(record.disbursement, p),
                                            )
                                        });
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">{highlight_matches(&record.id, &query)}</td>
                                                <td>{highlight_matches(&record.merchant, &query)}</td>
                                                <td>{record.total_products}</td>
                                                <td>{balance}</td>
                                                <td>{disbursement}</td>
                                                <td>{record.bank.clone()}</td>
                                                <td>{record.account_number.clone()}</td>
                                                <td>{record.date.clone()}</td>
                                                <td>
                                                    <StatusBadge label=record.status.label() modifier="badge--success" />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls />
            </div>

            <Modal
                is_open=show_manual
                on_close=Callback::new(move |_| show_manual.set(false))
                title="Pencairan Dana Manual"
            >
                <DisbursementDetails
                    directory=directory.get_value()
                    repo=repo
                    on_saved=on_saved
                />
            </Modal>

            <SuccessDialog
                is_open=show_success
                title="Pencairan Dana Berhasil! 💸"
                body="Pencairan dana manual telah berhasil ditambahkan ke dalam daftar. Anda dapat melihat entri baru di tabel keuangan."
                on_close=Callback::new(move |_| show_success.set(false))
            />
        </div>
    }
}
