use super::view_model::ProductDetailsViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::dialogs::ConfirmationDialog;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::form::{fields, VariationColumn};
use contracts::shared::data::InMemoryRepository;
use leptos::prelude::*;

const ADD_CONFIRM_TITLE: &str = "Kamu yakin ingin menambahkan produk ini ke daftar produk toko? 🛍️";
const ADD_CONFIRM_BODY: &str = "Begitu dikonfirmasi, produk akan muncul di daftar dan bisa langsung \
    dikelola, termasuk stok, harga, dan status tampil. Kalau masih ingin melakukan perubahan, tekan \
    Batal untuk kembali ke formulir ✨";
const EDIT_CONFIRM_TITLE: &str = "Kamu yakin ingin menyimpan perubahan pada produk ini 📝?";
const EDIT_CONFIRM_BODY: &str = "Perubahan akan langsung terlihat di daftar produk. Tekan Batal \
    untuk kembali ke formulir.";

#[component]
fn VariationRow(vm: ProductDetailsViewModel, index: usize) -> impl IntoView {
    let draft = vm.form.draft;
    let value = move |column: VariationColumn| {
        Signal::derive(move || {
            draft.with(|d| {
                d.variations
                    .get(index)
                    .map(|row| match column {
                        VariationColumn::Name => row.name.clone(),
                        VariationColumn::Price => row.price.clone(),
                        VariationColumn::Stock => row.stock.clone(),
                    })
                    .unwrap_or_default()
            })
        })
    };
    let on_input = move |column: VariationColumn| {
        Callback::new(move |v: String| vm.update_variation(index, column, v))
    };

    view! {
        <div class="variation-row">
            <Input
                label="Nama Variasi"
                placeholder="e.g., Pedas"
                value=value(VariationColumn::Name)
                on_input=on_input(VariationColumn::Name)
            />
            <Input
                label="Harga"
                input_type="number"
                placeholder="e.g., 15000"
                value=value(VariationColumn::Price)
                on_input=on_input(VariationColumn::Price)
                error=vm.form.field_error(fields::variation(index, "price"))
            />
            <Input
                label="Stok"
                input_type="number"
                placeholder="e.g., 50"
                value=value(VariationColumn::Stock)
                on_input=on_input(VariationColumn::Stock)
                error=vm.form.field_error(fields::variation(index, "stock"))
            />
            <button
                type="button"
                class="button button--icon button--danger-ghost"
                title="Hapus variasi"
                on:click=move |_| vm.remove_variation(index)
            >
                {icon("delete")}
            </button>
        </div>
    }
}

/// Add/edit product form with its confirmation step
#[component]
pub fn ProductDetails(
    id: Option<String>,
    repo: RwSignal<InMemoryRepository<Product>>,
    on_saved: Callback<Product>,
) -> impl IntoView {
    ProductDetailsViewModel::load(id, repo).map(|vm| {
        let draft = vm.form.draft;
        let is_edit = vm.is_edit_mode();
        // Rows re-render only when a row is added or removed, not on every keystroke.
        let variation_count = Memo::new(move |_| draft.with(|d| d.variations.len()));

        view! {
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

                <Input
                    id="umkm"
                    label="UMKM"
                    placeholder="Masukkan User..."
                    value=vm.form.text(|d| &d.merchant)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.merchant = v))
                    error=vm.form.field_error(fields::MERCHANT)
                />
                <div class="form__row">
                    <Input
                        id="category"
                        label="Kategori"
                        placeholder="Auto fill"
                        value=vm.form.text(|d| &d.category)
                        on_input=Callback::new(move |v: String| vm.form.edit(|d| d.category = v))
                    />
                    <Input
                        id="stock"
                        label="Stok"
                        input_type="number"
                        placeholder="Masukkan Stok Produk"
                        value=vm.form.text(|d| &d.stock)
                        on_input=Callback::new(move |v: String| vm.form.edit(|d| d.stock = v))
                        error=vm.form.field_error(fields::STOCK)
                    />
                </div>
                <Input
                    id="permitNumber"
                    label="No. Izin Edar (BPOM, PIRT)"
                    placeholder="Masukkan Nomor Izin Edar (BPOM, PIRT)..."
                    value=vm.form.text(|d| &d.permit_number)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.permit_number = v))
                />
                <Input
                    id="productName"
                    label="Nama Produk"
                    placeholder="Masukkan Nama Produk..."
                    value=vm.form.text(|d| &d.name)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.name = v))
                    error=vm.form.field_error(fields::NAME)
                />

                <div class="form__group">
                    <label class="form__label">"Variasi Produk (Opsional)"</label>
                    <div class="variation-list">
                        {move || {
                            (0..variation_count.get())
                                .map(|index| view! { <VariationRow vm=vm index=index /> })
                                .collect_view()
                        }}
                        <button
                            type="button"
                            class="button button--link"
                            on:click=move |_| vm.add_variation()
                        >
                            {icon("plus")}
                            "Tambah Variasi"
                        </button>
                    </div>
                </div>

                <Input
                    id="price"
                    label="Harga"
                    input_type="number"
                    placeholder="Masukkan harga Produk..."
                    value=vm.form.text(|d| &d.price)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.price = v))
                    error=vm.form.field_error(fields::PRICE)
                />
                <Textarea
                    id="description"
                    label="Keterangan Produk"
                    placeholder="Masukkan Keterangan Produk..."
                    rows=3
                    value=vm.form.text(|d| &d.description)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.description = v))
                />

                <button type="submit" class="button button--primary button--block">
                    {if is_edit { "Simpan Perubahan" } else { "Tambahkan Produk Baru" }}
                </button>
            </form>

            <ConfirmationDialog
                is_open=Signal::derive(move || vm.form.is_confirming())
                title={(if is_edit { EDIT_CONFIRM_TITLE } else { ADD_CONFIRM_TITLE }).to_string()}
                body={(if is_edit { EDIT_CONFIRM_BODY } else { ADD_CONFIRM_BODY }).to_string()}
                confirm_text={if is_edit { "Simpan" } else { "Tambahkan" }}
                on_confirm=Callback::new(move |_| vm.confirm_command(on_saved))
                on_cancel=Callback::new(move |_| vm.form.cancel_confirmation())
            />
        }
    })
}
