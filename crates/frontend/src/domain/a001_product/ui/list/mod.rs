use crate::app::{use_app_config, use_data_source};
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::dialogs::{ConfirmVariant, ConfirmationDialog};
use crate::shared::fault_boundary::FaultBoundary;
use crate::shared::form_flow::DetailsTarget;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_id_number, format_rupiah};
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::data::{InMemoryRepository, Repository};
use contracts::shared::search::filter_list;
use contracts::shared::toast::Severity;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let repo = RwSignal::new(InMemoryRepository::new(use_data_source().products()));
    let filter = RwSignal::new(String::new());
    let details = RwSignal::new(None::<DetailsTarget>);
    let pending_delete = RwSignal::new(None::<Product>);
    let toast = use_toast();
    let prefix = StoredValue::new(use_app_config().locale.currency_prefix);

    let rows = move || repo.with(|repo| filter_list(repo.records(), &filter.get()));

    let close_details = Callback::new(move |_| details.set(None));

    let on_saved = Callback::new(move |product: Product| {
        let was_edit = details.get_untracked().is_some_and(|t| t.is_edit());
        details.set(None);
        leptos::logging::log!("product saved: {}", product.id);
        if was_edit {
            toast.success("Produk berhasil diperbarui!");
        } else {
            toast.success("Produk baru berhasil ditambahkan!");
        }
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        match repo.try_update(|repo| repo.delete(&product.id)) {
            Some(Ok(_)) => {
                toast.add("Produk berhasil dihapus!", Severity::Error);
            }
            Some(Err(e)) => toast.error(e.to_string()),
            None => {}
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Kelola Produk" subtitle="Dashboard / Kelola Produk">
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v: String| filter.set(v))
                    placeholder="Cari produk, kategori atau UMKM"
                />
                <button class="button button--primary" on:click=move |_| details.set(Some(DetailsTarget::New))>
                    {icon("plus")}
                    "Tambah Produk Baru"
                </button>
            </PageHeader>

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Produk"</th>
                            <th>"Kategori"</th>
                            <th>"UMKM"</th>
                            <th class="table__cell--right">"Harga"</th>
                            <th class="table__cell--right">"Stok"</th>
                            <th class="table__cell--right">"Terjual"</th>
                            <th>"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = filter.get();
                            rows()
                                .into_iter()
                                .map(|product| {
                                    let edit_id = product.id.clone();
                                    let to_delete = product.clone();
                                    let price = prefix.with_value(|p| format_rupiah(product.price, p));
                                    view! {
                                        <tr class:table__row--empty-stock={product.stock == 0}>
                                            <td>
                                                <div class="table__product">
                                                    <img class="table__thumb" src=product.image.clone() alt=product.name.clone() />
                                                    <span>{highlight_matches(&product.name, &query)}</span>
                                                </div>
                                            </td>
                                            <td>{highlight_matches(&product.category, &query)}</td>
                                            <td>{highlight_matches(&product.merchant, &query)}</td>
                                            <td class="table__cell--right">{price}</td>
                                            <td class="table__cell--right">{format_id_number(product.stock.into())}</td>
                                            <td class="table__cell--right">{format_id_number(product.sold.into())}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| details.set(Some(DetailsTarget::Edit(edit_id.clone())))
                                                >
                                                    {icon("edit")}
                                                </button>
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
                <Show when=move || rows().is_empty()>
                    <div class="table__empty">"Tidak ada produk yang cocok."</div>
                </Show>
                <PaginationControls />
            </div>

            <Modal
                is_open=Signal::derive(move || details.get().is_some())
                on_close=close_details
                title=Signal::derive(move || {
                    let title = if details.get().is_some_and(|t| t.is_edit()) {
                        "Edit Produk"
                    } else {
                        "Tambah Produk Baru"
                    };
                    title.to_string()
                })
                wide=true
            >
                {move || details.get().map(|target| view! {
                    <FaultBoundary context="Produk">
                        <ProductDetails id=target.id() repo=repo on_saved=on_saved />
                    </FaultBoundary>
                })}
            </Modal>

            <ConfirmationDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Hapus produk ini?"
                body=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|p| format!("Produk \"{}\" akan dihapus dari daftar.", p.name))
                        .unwrap_or_default()
                })
                variant=ConfirmVariant::Delete
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </div>
    }
}
