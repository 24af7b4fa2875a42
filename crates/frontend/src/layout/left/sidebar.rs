//! Sidebar navigation: one item per page, "Kelola Pengguna" expands into its sub-pages

use crate::layout::global_context::{AppGlobalContext, Page, UserSubPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn SubNavItem(sub: UserSubPage) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_active =
        move || ctx.active_page.get() == Page::Users && ctx.user_sub_page.get() == sub;

    view! {
        <div
            class="app-sidebar__item app-sidebar__item--child"
            class:app-sidebar__item--active=is_active
            on:click=move |_| ctx.navigate_user_sub_page(sub)
        >
            <span>{sub.label()}</span>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Collapsing the sidebar folds the submenu too
    Effect::new(move |_| {
        if !ctx.left_open.get() {
            ctx.users_menu_open.set(false);
        }
    });

    let on_item_click = move |page: Page| {
        if page == Page::Users {
            if ctx.active_page.get_untracked() != Page::Users {
                ctx.navigate_user_sub_page(UserSubPage::UserList);
            }
            if ctx.left_open.get_untracked() {
                ctx.toggle_users_menu();
            }
        } else {
            ctx.users_menu_open.set(false);
            ctx.navigate(page);
        }
    };

    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__brand">
                <img src="/assets/img/iconbsi.svg" alt="Logo" class="app-sidebar__logo" />
            </div>
            <nav class="app-sidebar__content">
                {Page::ALL.into_iter().map(|page| {
                    let has_children = page == Page::Users;
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active_page.get() == page
                                on:click=move |_| on_item_click(page)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(page.icon())}
                                    <span class="app-sidebar__label">{page.label()}</span>
                                </div>
                                {has_children.then(|| view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || ctx.users_menu_open.get()
                                    >
                                        {icon("chevron-down")}
                                    </div>
                                })}
                            </div>

                            {has_children.then(|| view! {
                                <Show when=move || ctx.users_menu_open.get() && ctx.left_open.get()>
                                    <div class="app-sidebar__children">
                                        {UserSubPage::ALL
                                            .into_iter()
                                            .map(|sub| view! { <SubNavItem sub=sub /> })
                                            .collect_view()}
                                    </div>
                                </Show>
                            })}
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
