use super::view_model::MerchantDetailsViewModel;
use crate::shared::components::ui::Input;
use crate::shared::dialogs::ConfirmationDialog;
use contracts::domain::a002_umkm::aggregate::Merchant;
use contracts::domain::a002_umkm::form::fields;
use contracts::shared::data::InMemoryRepository;
use leptos::prelude::*;

#[component]
pub fn MerchantDetails(
    repo: RwSignal<InMemoryRepository<Merchant>>,
    on_saved: Callback<Merchant>,
) -> impl IntoView {
    let vm = MerchantDetailsViewModel::new(repo);

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
                id="userName"
                label="Nama Pengguna"
                placeholder="Masukkan User..."
                value=vm.form.text(|d| &d.name)
                on_input=Callback::new(move |v: String| vm.form.edit(|d| d.name = v))
                error=vm.form.field_error(fields::NAME)
            />
            <div class="form__row">
                <Input
                    id="bank"
                    label="Bank"
                    placeholder="Masukkan Nama Bank..."
                    value=vm.form.text(|d| &d.bank)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.bank = v))
                    error=vm.form.field_error(fields::BANK)
                />
                <Input
                    id="accountNumber"
                    label="Rekening"
                    placeholder="Masukkan Rekening"
                    value=vm.form.text(|d| &d.account_number)
                    on_input=Callback::new(move |v: String| vm.form.edit(|d| d.account_number = v))
                    error=vm.form.field_error(fields::ACCOUNT_NUMBER)
                />
            </div>
            <Input
                id="contact"
                label="Kontak"
                placeholder="Masukkan Kontak..."
                value=vm.form.text(|d| &d.contact)
                on_input=Callback::new(move |v: String| vm.form.edit(|d| d.contact = v))
                error=vm.form.field_error(fields::CONTACT)
            />

            <button type="submit" class="button button--primary button--block">
                "Tambahkan UMKM"
            </button>
        </form>

        <ConfirmationDialog
            is_open=Signal::derive(move || vm.form.is_confirming())
            title="Tambahkan UMKM baru ke daftar? 🏪"
            body=Signal::derive(move || {
                let name = vm.form.draft.with(|d| d.name.trim().to_string());
                format!("{name} akan muncul di daftar UMKM dengan saldo awal nol. Tekan Batal untuk kembali ke formulir.")
            })
            confirm_text="Tambahkan"
            on_confirm=Callback::new(move |_| vm.confirm_command(on_saved))
            on_cancel=Callback::new(move |_| vm.form.cancel_confirmation())
        />
    }
}
