use crate::app::{use_app_config, use_data_source};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::number_format::format_rupiah;
use contracts::shared::search::filter_list;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn SalesList() -> impl IntoView {
    let sales = StoredValue::new(use_data_source().sales());
    let filter = RwSignal::new(String::new());
    let prefix = StoredValue::new(use_app_config().locale.currency_prefix);

    view! {
        <div class="page">
            <PageHeader title="Penjualan" subtitle="Dashboard / Kelola Pengguna">
                {()}
            </PageHeader>

            <div class="card">
                <div class="card__toolbar">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v: String| filter.set(v))
                        placeholder="Cari Pesanan berdasarkan ID Pesanan, ID Pengguna, Produk"
                    />
                </div>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID Pesanan"</th>
                                <th>"Nama Pengguna"</th>
                                <th>"Status"</th>
                                <th>"Produk"</th>
                                <th>"Tanggal Pemesanan"</th>
                                <th>"Nomor Resi"</th>
                                <th>"Harga"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                sales
                                    .with_value(|sales| filter_list(sales, &query))
                                    .into_iter()
                                    .map(|sale| {
                                        let price = prefix.with_value(|p| format_rupiah(sale.price, p));
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">{highlight_matches(&sale.id, &query)}</td>
                                                <td>{highlight_matches(&sale.user_name, &query)}</td>
                                                <td>
                                                    <StatusBadge
                                                        label=sale.status.label()
                                                        modifier=sale.status.badge_class()
                                                    />
                                                </td>
                                                <td>{sale.product_count}</td>
                                                <td>{sale.order_date.clone()}</td>
                                                <td>{sale.receipt_number.clone()}</td>
                                                <td>{price}</td>
                                                <td class="table__actions">
                                                    <button class="button button--icon" title="Lihat">
                                                        {icon("eye")}
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
        </div>
    }
}
