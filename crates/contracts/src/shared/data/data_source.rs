use super::seed;
use crate::dashboards::d100_revenue_summary::{InboxMessage, TopProduct, VisitorShare};
use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_umkm::aggregate::{Merchant, MerchantDirectory};
use crate::domain::a003_finance::aggregate::FinanceRecord;
use crate::domain::a004_sales::aggregate::SalesRecord;
use crate::domain::a005_shipping::aggregate::ShippingRecord;
use crate::domain::a006_order::aggregate::OrderRecord;
use crate::domain::a007_app_user::aggregate::AppUser;
use crate::system::support::FaqEntry;

/// Seed provider for the pages
///
/// Each call returns a fresh copy; pages own what they receive.
pub trait DataSource: Send + Sync {
    fn products(&self) -> Vec<Product>;
    fn merchants(&self) -> Vec<Merchant>;
    fn merchant_directory(&self) -> MerchantDirectory;
    fn finance_records(&self) -> Vec<FinanceRecord>;
    /// Sales feeding the dashboard revenue cards
    fn dashboard_sales(&self) -> Vec<SalesRecord>;
    fn sales(&self) -> Vec<SalesRecord>;
    fn shipments(&self) -> Vec<ShippingRecord>;
    fn orders(&self) -> Vec<OrderRecord>;
    fn app_users(&self) -> Vec<AppUser>;
    fn top_products(&self) -> Vec<TopProduct>;
    fn inbox_messages(&self) -> Vec<InboxMessage>;
    fn visitor_shares(&self) -> Vec<VisitorShare>;
    fn total_visitors(&self) -> u32;
    fn faqs(&self) -> Vec<FaqEntry>;
}

/// Compiled-in mock data
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

impl DataSource for MockDataSource {
    fn products(&self) -> Vec<Product> {
        seed::PRODUCTS.clone()
    }

    fn merchants(&self) -> Vec<Merchant> {
        seed::MERCHANTS.clone()
    }

    fn merchant_directory(&self) -> MerchantDirectory {
        seed::MERCHANT_DIRECTORY.clone()
    }

    fn finance_records(&self) -> Vec<FinanceRecord> {
        seed::FINANCE_RECORDS.clone()
    }

    fn dashboard_sales(&self) -> Vec<SalesRecord> {
        seed::DASHBOARD_SALES.clone()
    }

    fn sales(&self) -> Vec<SalesRecord> {
        seed::SALES.clone()
    }

    fn shipments(&self) -> Vec<ShippingRecord> {
        seed::SHIPMENTS.clone()
    }

    fn orders(&self) -> Vec<OrderRecord> {
        seed::ORDERS.clone()
    }

    fn app_users(&self) -> Vec<AppUser> {
        seed::APP_USERS.clone()
    }

    fn top_products(&self) -> Vec<TopProduct> {
        seed::TOP_PRODUCTS.clone()
    }

    fn inbox_messages(&self) -> Vec<InboxMessage> {
        seed::INBOX_MESSAGES.clone()
    }

    fn visitor_shares(&self) -> Vec<VisitorShare> {
        seed::VISITOR_SHARES.clone()
    }

    fn total_visitors(&self) -> u32 {
        seed::TOTAL_VISITORS
    }

    fn faqs(&self) -> Vec<FaqEntry> {
        seed::FAQS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_are_independent() {
        let source = MockDataSource;
        let mut first = source.app_users();
        first.clear();
        assert_eq!(source.app_users().len(), 3);
    }

    #[test]
    fn test_seeds_are_populated() {
        let source: &dyn DataSource = &MockDataSource;
        assert_eq!(source.finance_records()[0].id, "B010");
        assert_eq!(source.merchant_directory().len(), 3);
        assert_eq!(source.visitor_shares().len(), 4);
        assert_eq!(source.faqs().len(), 4);
    }
}
