use crate::app::{use_app_config, use_data_source};
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::number_format::format_rupiah;
use contracts::shared::search::filter_list;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let orders = StoredValue::new(use_data_source().orders());
    let filter = RwSignal::new(String::new());
    let prefix = StoredValue::new(use_app_config().locale.currency_prefix);

    view! {
        <div class="page">
            <PageHeader title="Pesanan" subtitle="Dashboard / Kelola Pengguna">
                {()}
            </PageHeader>

            <div class="card">
                <div class="card__toolbar">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v: String| filter.set(v))
                        placeholder="Cari Pesanan"
                    />
                </div>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID Pesanan"</th>
                                <th>"Nama Pengguna"</th>
                                <th>"Produk"</th>
                                <th>"Total Harga"</th>
                                <th>"Tanggal"</th>
                                <th>"Email"</th>
                                <th>"Alamat"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                orders
                                    .with_value(|orders| filter_list(orders, &query))
                                    .into_iter()
                                    .map(|order| {
                                        let total = prefix.with_value(|p| format_rupiah(order.total_price, p));
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">{highlight_matches(&order.id, &query)}</td>
                                                <td>{highlight_matches(&order.user_name, &query)}</td>
                                                <td>{order.product_count}</td>
                                                <td>{total}</td>
                                                <td>{order.date.clone()}</td>
                                                <td>{highlight_matches(&order.email, &query)}</td>
                                                <td class="table__cell--truncate">{order.address.clone()}</td>
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
