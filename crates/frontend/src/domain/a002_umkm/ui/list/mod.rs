use crate::app::{use_app_config, use_data_source};
use crate::domain::a002_umkm::ui::details::MerchantDetails;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::dialogs::{ConfirmVariant, ConfirmationDialog};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::Modal;
use crate::shared::number_format::format_rupiah;
use crate::shared::toast::use_toast;
use contracts::domain::a002_umkm::aggregate::Merchant;
use contracts::shared::data::{InMemoryRepository, Repository};
use contracts::shared::search::filter_list;
use contracts::shared::toast::Severity;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MerchantList() -> impl IntoView {
    let repo = RwSignal::new(InMemoryRepository::new(use_data_source().merchants()));
    let filter = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Merchant>);
    let toast = use_toast();
    let prefix = StoredValue::new(use_app_config().locale.currency_prefix);

    let rows = move || repo.with(|repo| filter_list(repo.records(), &filter.get()));

    let on_saved = Callback::new(move |merchant: Merchant| {
        show_add.set(false);
        toast.success(format!("UMKM {} berhasil ditambahkan!", merchant.name));
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(merchant) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        match repo.try_update(|repo| repo.delete(&merchant.id)) {
            Some(Ok(_)) => {
                toast.add("UMKM berhasil dihapus!", Severity::Error);
            }
            Some(Err(e)) => toast.error(e.to_string()),
            None => {}
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Kelola UMKM" subtitle="Dashboard / Kelola UMKM">
                {()}
            </PageHeader>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Pengguna UMKM"</h3>
                    <div class="card__actions">
                        <SearchInput
                            value=filter
                            on_change=Callback::new(move |v: String| filter.set(v))
                            placeholder="Cari Pengguna"
                        />
                        <button class="button button--primary" on:click=move |_| show_add.set(true)>
                            {icon("plus")}
                            "Tambah Pengguna Baru"
                        </button>
                    </div>
                </div>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID UMKM"</th>
                                <th>"UMKM"</th>
                                <th>"Total Produk"</th>
                                <th>"Kontak"</th>
                                <th>"Saldo Saat Ini"</th>
                                <th>"Bank"</th>
                                <th>"Rekening"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                rows()
                                    .into_iter()
                                    .map(|merchant| {
                                        let balance = prefix.with_value(|p| format_rupiah(merchant.balance, p));
                                        let to_delete = merchant.clone();
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">{highlight_matches(&merchant.id, &query)}</td>
                                                <td>{highlight_matches(&merchant.name, &query)}</td>
                                                <td>{merchant.total_products}</td>
                                                <td>{merchant.contact.clone()}</td>
                                                <td>{balance}</td>
                                                <td>{merchant.bank.clone()}</td>
                                                <td>{merchant.account_number.clone()}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="button button--icon button--danger-ghost"
                                                        title="Hapus"
                                                        on:click=move |_| pending_delete.set(Some(to_delete.clone()))
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls compact=true />
            </div>

            <Modal
                is_open=show_add
                on_close=Callback::new(move |_| show_add.set(false))
                title="Tambah Pengguna Baru"
            >
                <MerchantDetails repo=repo on_saved=on_saved />
            </Modal>

            <ConfirmationDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Hapus UMKM ini?"
                body=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|m| format!("{} akan dihapus dari daftar UMKM.", m.name))
                        .unwrap_or_default()
                })
                variant=ConfirmVariant::Delete
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </div>
    }
}
