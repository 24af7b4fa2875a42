use crate::app::use_data_source;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::shared::search::filter_list;
use leptos::prelude::*;

/// Shipments awaiting manual receipt check or completion
///
/// Both row actions are rendered without behavior.
#[component]
#[allow(non_snake_case)]
pub fn ShippingList() -> impl IntoView {
    let shipments = StoredValue::new(use_data_source().shipments());
    let filter = RwSignal::new(String::new());

    view! {
        <div class="page">
            <PageHeader title="Pengiriman" subtitle="Dashboard / Kelola Pengguna">
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
                                <th>"Tanggal Pengiriman"</th>
                                <th>"Nomor Resi"</th>
                                <th>"Cek Resi"</th>
                                <th>"Selesaikan Pesanan Manual"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                shipments
                                    .with_value(|shipments| filter_list(shipments, &query))
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">{highlight_matches(&item.id, &query)}</td>
                                                <td>{highlight_matches(&item.user_name, &query)}</td>
                                                <td>{item.product_count}</td>
                                                <td>{item.shipping_date.clone()}</td>
                                                <td>{highlight_matches(&item.receipt_number, &query)}</td>
                                                <td>
                                                    <button class="button button--secondary button--small">
                                                        "Cek Manual Resi"
                                                    </button>
                                                </td>
                                                <td>
                                                    <button class="button button--primary button--small">
                                                        "Selesai"
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
