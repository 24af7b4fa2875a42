//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Search field
//! - Notifications button
//! - Profile dropdown with logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::click_outside::close_on_outside_click;
use crate::shared::dialogs::{ConfirmVariant, ConfirmationDialog};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::shared::toast::Severity;
use leptos::html;
use leptos::prelude::*;

pub const PROFILE_NAME: &str = "Thomas Anree";
pub const PROFILE_ROLE: &str = "Administrator";

const LOGOUT_TITLE: &str = "Kamu yakin mau keluar dari aplikasi🧐?";
const LOGOUT_BODY: &str = "Apakah Kamu yakin ingin keluar dari akun? 🔒 Semua perubahan yang \
    belum disimpan mungkin akan hilang. Tekan Keluar untuk melanjutkan 🚪 atau Batal jika ingin \
    tetap berada di akun Kamu 😊.";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let toast = use_toast();

    let dropdown_open = RwSignal::new(false);
    let logout_open = RwSignal::new(false);
    let dropdown_ref = NodeRef::<html::Div>::new();
    close_on_outside_click(dropdown_ref, dropdown_open);

    let open_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dropdown_open.set(false);
        logout_open.set(true);
    };

    // No session to end; the confirmation is the whole flow.
    let confirm_logout = Callback::new(move |_| {
        log::info!("User logged out.");
        logout_open.set(false);
        toast.add("Kamu telah keluar dari aplikasi.", Severity::Info);
    });

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {icon("menu")}
                </button>
                <div class="top-header__search">
                    <span class="top-header__search-icon">{icon("search")}</span>
                    <input type="search" name="search" placeholder="Type to search..." />
                </div>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notifikasi" aria-label="Notifications">
                    {icon("bell")}
                </button>

                <div class="top-header__profile" node_ref=dropdown_ref>
                    <button
                        class="top-header__user"
                        on:click=move |_| dropdown_open.update(|open| *open = !*open)
                    >
                        <span class="top-header__avatar">{icon("user")}</span>
                        <span class="top-header__user-text">
                            <span class="top-header__user-name">{PROFILE_NAME}</span>
                            <span class="top-header__user-role">{PROFILE_ROLE}</span>
                        </span>
                        <span
                            class="top-header__chevron"
                            class:top-header__chevron--open=move || dropdown_open.get()
                        >
                            {icon("chevron-down")}
                        </span>
                    </button>

                    <Show when=move || dropdown_open.get()>
                        <div class="dropdown-menu">
                            <a href="#" class="dropdown-menu__item" on:click=|ev| ev.prevent_default()>
                                {icon("user")}
                                "Profil"
                            </a>
                            <a href="#" class="dropdown-menu__item" on:click=|ev| ev.prevent_default()>
                                {icon("settings")}
                                "Pengaturan"
                            </a>
                            <div class="dropdown-menu__divider"></div>
                            <a href="#" class="dropdown-menu__item dropdown-menu__item--danger" on:click=open_logout>
                                {icon("log-out")}
                                "Keluar"
                            </a>
                        </div>
                    </Show>
                </div>
            </div>
        </header>

        <ConfirmationDialog
            is_open=logout_open
            title=LOGOUT_TITLE.to_string()
            body=LOGOUT_BODY.to_string()
            variant=ConfirmVariant::Logout
            on_confirm=confirm_logout
            on_cancel=Callback::new(move |_| logout_open.set(false))
        />
    }
}
