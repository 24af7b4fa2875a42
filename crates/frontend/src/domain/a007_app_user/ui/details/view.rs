use super::view_model::AppUserDetailsViewModel;
use crate::shared::components::ui::Input;
use crate::shared::dialogs::ConfirmationDialog;
use contracts::domain::a007_app_user::aggregate::AppUser;
use contracts::domain::a007_app_user::form::fields;
use contracts::shared::data::{InMemoryRepository, RepositoryError};
use leptos::prelude::*;

#[component]
pub fn AppUserDetails(
    id: Option<String>,
    repo: RwSignal<InMemoryRepository<AppUser>>,
    on_saved: Callback<AppUser>,
) -> Result<impl IntoView, RepositoryError> {
    let vm = AppUserDetailsViewModel::load(id, repo)?;
    let edit = vm.is_edit_mode();

    let (button_text, confirm_title, confirm_body) = if edit {
        (
            "Simpan Perubahan",
            "Simpan perubahan data pengguna ini? 📝",
            "Nama dan email pengguna akan diperbarui.",
        )
    } else {
        (
            "Tambahkan Pengguna",
            "Tambahkan pengguna baru ke daftar? 👤",
            "Pengguna baru akan muncul di daftar dengan total pesanan nol.",
        )
    };

    Ok(view! {
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
                placeholder="Masukkan nama pengguna..."
                value=vm.form.text(|d| &d.name)
                on_input=Callback::new(move |v: String| vm.form.edit(|d| d.name = v))
                error=vm.form.field_error(fields::NAME)
            />
            <Input
                id="email"
                label="Email"
                input_type="email"
                placeholder="Masukkan email..."
                value=vm.form.text(|d| &d.email)
                on_input=Callback::new(move |v: String| vm.form.edit(|d| d.email = v))
                error=vm.form.field_error(fields::EMAIL)
            />

            <button type="submit" class="button button--primary button--block">
                {button_text}
            </button>
        </form>

        <ConfirmationDialog
            is_open=Signal::derive(move || vm.form.is_confirming())
            title=confirm_title
            body=confirm_body
            confirm_text={if edit { "Simpan" } else { "Tambahkan" }}
            on_confirm=Callback::new(move |_| vm.confirm_command(on_saved))
            on_cancel=Callback::new(move |_| vm.form.cancel_confirmation())
        />
    })
}
