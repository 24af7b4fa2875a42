use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_open = move || ctx.left_open.get();

    view! {
        <aside data-zone="left" class="left" class:left--collapsed=move || !is_open()>
            {children()}
        </aside>
    }
}
