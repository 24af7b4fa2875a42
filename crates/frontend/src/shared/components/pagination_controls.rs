use crate::shared::icons::icon;
use contracts::shared::pagination::{PageMark, PaginationOrnament, PaginationStyle};
use leptos::prelude::*;

/// Pagination footer under a table
///
/// Renders the fixed example state of `PaginationOrnament`; the buttons do not page
/// through the rows above.
#[component]
pub fn PaginationControls(
    /// Numbered (default) or compact arrows
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let style = if compact {
        PaginationStyle::Compact
    } else {
        PaginationStyle::Numbered
    };
    let ornament = PaginationOrnament::example(style);

    let pages = move || {
        ornament
            .marks()
            .into_iter()
            .map(|mark| match mark {
                PageMark::Number(n) => {
                    let class = if n == ornament.current_page {
                        "pagination-btn pagination-btn--active"
                    } else {
                        "pagination-btn"
                    };
                    view! { <button class=class>{n}</button> }.into_any()
                }
                PageMark::Ellipsis => {
                    view! { <span class="pagination-ellipsis">"..."</span> }.into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{ornament.summary()}</span>
            <div class="pagination-buttons">
                <button
                    class="pagination-btn"
                    disabled={!ornament.has_previous()}
                    title="Sebelumnya"
                >
                    {icon("chevron-left")}
                </button>
                {(style == PaginationStyle::Numbered).then(pages)}
                <button
                    class="pagination-btn"
                    disabled={!ornament.has_next()}
                    title="Berikutnya"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
