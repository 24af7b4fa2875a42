pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |      Content       |
/// |  (Left) |     (Center)       |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            // Left sidebar - uses ctx.left_open for visibility
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
