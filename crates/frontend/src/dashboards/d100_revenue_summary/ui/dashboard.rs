use super::calendar::DatePicker;
use super::donut_chart::DonutChart;
use crate::app::{today, use_app_config, use_data_source};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::click_outside::close_on_outside_click;
use crate::shared::components::{PaginationControls, StatCard};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::number_format::{format_orders, format_rupiah};
use contracts::dashboards::d100_revenue_summary::{summarize, InboxTab};
use contracts::shared::date_utils::CalendarDay;
use contracts::shared::search::Searchable;
use leptos::html;
use leptos::prelude::*;

/// Dashboard: revenue cards, visitor analytics, top products and the inbox
#[component]
pub fn RevenueDashboard() -> impl IntoView {
    let source = use_data_source();
    let config = use_app_config();

    let initial = config.reference_date().unwrap_or_else(|e| {
        log::error!("dashboard: {e:#}; starting from today");
        today()
    });
    let reference = RwSignal::new(initial);
    let sales = StoredValue::new(source.dashboard_sales());
    let summary = Memo::new(move |_| {
        let day = reference.get();
        sales.with_value(|sales| summarize(sales, day))
    });
    let prefix = StoredValue::new(config.locale.currency_prefix);
    let money = move |amount: f64| prefix.with_value(|p| format_rupiah(amount, p));

    let calendar_open = RwSignal::new(false);
    let calendar_container = NodeRef::<html::Div>::new();
    close_on_outside_click(calendar_container, calendar_open);
    let toggle_calendar = Callback::new(move |_| calendar_open.update(|open| *open = !*open));
    let pick_day = Callback::new(move |day: CalendarDay| {
        leptos::logging::log!("dashboard: reference date {}", day.format_dmy());
        reference.set(day);
        calendar_open.set(false);
    });

    view! {
        <div class="page dashboard">
            <div class="dashboard__cards" node_ref=calendar_container>
                <div class="stat-grid">
                    <StatCard
                        label="Total Saldo Midtrans"
                        icon_name="wallet"
                        value=Signal::derive(move || money(summary.get().total.revenue))
                        detail=Signal::derive(move || summary.get().total.orders_label_thousands())
                        on_calendar=toggle_calendar
                    />
                    <StatCard
                        label=Signal::derive(move || summary.get().month_title())
                        icon_name="calendar"
                        value=Signal::derive(move || money(summary.get().month.revenue))
                        detail=Signal::derive(move || format_orders(summary.get().month.orders))
                        on_calendar=toggle_calendar
                    />
                    <StatCard
                        label=Signal::derive(move || summary.get().day_title())
                        icon_name="dashboard"
                        value=Signal::derive(move || money(summary.get().day.revenue))
                        detail=Signal::derive(move || format_orders(summary.get().day.orders))
                        on_calendar=toggle_calendar
                    />
                </div>
                <Show when=move || calendar_open.get()>
                    <div class="dashboard__calendar">
                        <DatePicker initial=reference.get_untracked() on_select=pick_day />
                    </div>
                </Show>
            </div>

            <div class="dashboard__row">
                <VisitorAnalytics />
                <TopProducts />
            </div>

            <Inbox />
        </div>
    }
}

#[component]
fn VisitorAnalytics() -> impl IntoView {
    let source = use_data_source();
    let shares = source.visitor_shares();
    let legend = shares
        .iter()
        .map(|share| {
            view! {
                <div class="legend__item">
                    <span class="legend__dot" style=format!("background-color: {}", share.color)></span>
                    <div>
                        <p class="legend__label">{share.label.clone()}</p>
                        <p class="legend__value">{format!("{}%", share.value)}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card dashboard__analytics">
            <div class="card__header">
                <h3 class="card__title">"Visitors Analytics"</h3>
                <button class="button button--secondary button--small">
                    "Monthly"
                    {icon("chevron-down")}
                </button>
            </div>
            <div class="analytics">
                <div class="analytics__chart">
                    <DonutChart shares=shares visitors=source.total_visitors() />
                    <span class="analytics__growth">"20.93%"</span>
                </div>
                <div class="legend">{legend}</div>
            </div>
        </div>
    }
}

#[component]
fn TopProducts() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let rows = use_data_source()
        .top_products()
        .into_iter()
        .map(|product| {
            view! {
                <div class="top-products__row">
                    <div class="table__product">
                        <img class="table__thumb" src=product.image.clone() alt=product.name.clone() />
                        <span>{product.name.clone()}</span>
                    </div>
                    <span class="top-products__muted">{product.category}</span>
                    <span>{format!("${}", product.price)}</span>
                    <span class="top-products__clicks">{product.clicks}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card top-products">
            <h3 class="card__title">"Top Product Interest"</h3>
            <div class="top-products__head">
                <span>"Product Name"</span>
                <span>"Category"</span>
                <span>"Price"</span>
                <span class="top-products__clicks">"Click"</span>
            </div>
            {rows}
            <button
                class="button button--primary button--block"
                on:click=move |_| ctx.navigate(Page::Products)
            >
                "Kelola Produk"
            </button>
        </div>
    }
}

/// Support questions split into unread ("Pertanyaan Masuk") and read ("Selesai")
#[component]
fn Inbox() -> impl IntoView {
    let messages = StoredValue::new(use_data_source().inbox_messages());
    let tab = RwSignal::new(InboxTab::default());
    let filter = RwSignal::new(String::new());

    let rows = move || {
        let tab = tab.get();
        let query = filter.get();
        messages.with_value(|messages| {
            messages
                .iter()
                .filter(|m| tab.contains(m) && m.matches_filter(&query))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="card inbox">
            <div class="card__header">
                <div class="inbox__toolbar">
                    <div class="tabs">
                        {InboxTab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active={move || tab.get() == t}
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    <div class="inbox__actions">
                        <button class="button button--icon" title="Unduh">{icon("download")}</button>
                        <button class="button button--icon" title="Kirim">{icon("send")}</button>
                        <button class="button button--icon" title="Hapus">{icon("delete")}</button>
                        <button class="button button--icon" title="Lainnya">{icon("more")}</button>
                    </div>
                </div>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v: String| filter.set(v))
                    placeholder="Search for Pengguna, email, address..."
                />
            </div>

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell--check"><input type="checkbox" /></th>
                            <th>"Sender"</th>
                            <th>"Subject"</th>
                            <th class="table__cell--right">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|message| view! {
                                    <tr class:inbox__row--unread={!message.read}>
                                        <td class="table__cell--check"><input type="checkbox" /></td>
                                        <td>{message.sender}</td>
                                        <td>{message.subject}</td>
                                        <td class="table__cell--right">{message.date}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls />
        </div>
    }
}
