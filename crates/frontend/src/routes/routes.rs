use crate::dashboards::d100_revenue_summary::ui::RevenueDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_umkm::ui::list::MerchantList;
use crate::domain::a003_finance::ui::list::FinanceList;
use crate::domain::a004_sales::ui::list::SalesList;
use crate::domain::a005_shipping::ui::list::ShippingList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_app_user::ui::list::AppUserList;
use crate::layout::global_context::{AppGlobalContext, Page, UserSubPage};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::fault_boundary::FaultBoundary;
use crate::system::pages::help_center::HelpCenter;
use leptos::prelude::*;

/// Page body for the current selection; each switch mounts a fresh page, so
/// working sets do not survive navigation.
fn render_page(page: Page, sub: UserSubPage) -> AnyView {
    match page {
        Page::Dashboard => view! { <RevenueDashboard /> }.into_any(),
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Finance => view! { <FinanceList /> }.into_any(),
        Page::Merchants => view! { <MerchantList /> }.into_any(),
        Page::Users => match sub {
            UserSubPage::UserList => view! { <AppUserList /> }.into_any(),
            UserSubPage::Orders => view! { <OrderList /> }.into_any(),
            UserSubPage::Shipping => view! { <ShippingList /> }.into_any(),
            UserSubPage::Sales => view! { <SalesList /> }.into_any(),
        },
        Page::Help => view! { <HelpCenter /> }.into_any(),
    }
}

#[component]
fn Center() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    // Memo so re-selecting the current page does not remount it
    let location = Memo::new(move |_| (ctx.active_page.get(), ctx.user_sub_page.get()));

    move || {
        let (page, sub) = location.get();
        let context = match page {
            Page::Users => sub.label(),
            _ => page.label(),
        };
        view! {
            <FaultBoundary context=context>
                {render_page(page, sub)}
            </FaultBoundary>
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
