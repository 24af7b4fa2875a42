use super::dto::{Bucket, RevenueSummary};
use crate::domain::a004_sales::aggregate::SalesRecord;
use crate::shared::date_utils::CalendarDay;

/// All-time, month and day totals for a reference date
///
/// Single pass over the records. A record whose date does not parse counts toward
/// the all-time total only.
pub fn summarize(sales: &[SalesRecord], reference: CalendarDay) -> RevenueSummary {
    let mut total = Bucket::default();
    let mut month = Bucket::default();
    let mut day = Bucket::default();

    for record in sales {
        let orders = u64::from(record.product_count);
        total.add(record.price, orders);

        let Some(date) = CalendarDay::parse_dmy(&record.order_date) else {
            continue;
        };
        if date.same_month(&reference) {
            month.add(record.price, orders);
            if date.day == reference.day {
                day.add(record.price, orders);
            }
        }
    }

    RevenueSummary {
        reference,
        total,
        month,
        day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_sales::aggregate::SalesStatus;
    use crate::shared::data::seed;

    fn sale(id: &str, date: &str, price: f64, qty: u32) -> SalesRecord {
        SalesRecord {
            id: id.into(),
            user_name: "Mamat".into(),
            status: SalesStatus::Completed,
            product_count: qty,
            order_date: date.into(),
            receipt_number: "-".into(),
            price,
        }
    }

    #[test]
    fn test_seed_day_with_one_record() {
        let summary = summarize(&seed::DASHBOARD_SALES, CalendarDay::new(2024, 7, 25));
        assert_eq!(summary.day.revenue, 300000.0);
        assert_eq!(summary.day.orders, 5);
    }

    #[test]
    fn test_seed_empty_day_and_july_month() {
        let summary = summarize(&seed::DASHBOARD_SALES, CalendarDay::new(2024, 7, 1));
        assert_eq!(summary.day, Bucket::default());

        let july: f64 = seed::DASHBOARD_SALES
            .iter()
            .filter(|s| s.order_date.ends_with("/07/2024"))
            .map(|s| s.price)
            .sum();
        assert_eq!(summary.month.revenue, july);
        assert!(summary.month.orders > 0);
    }

    #[test]
    fn test_buckets_are_nested() {
        let references = [
            CalendarDay::new(2024, 5, 20),
            CalendarDay::new(2024, 6, 20),
            CalendarDay::new(2024, 7, 3),
            CalendarDay::new(2023, 7, 3),
        ];
        for reference in references {
            let s = summarize(&seed::DASHBOARD_SALES, reference);
            assert!(s.day.revenue <= s.month.revenue);
            assert!(s.month.revenue <= s.total.revenue);
            assert!(s.day.orders <= s.month.orders);
            assert!(s.month.orders <= s.total.orders);
        }
    }

    #[test]
    fn test_single_record_buckets_are_equal() {
        let sales = vec![sale("S1", "03/07/2024", 220000.0, 3)];
        let s = summarize(&sales, CalendarDay::new(2024, 7, 3));
        assert_eq!(s.day, s.month);
        assert_eq!(s.month, s.total);
    }

    #[test]
    fn test_unparseable_dates_count_toward_total_only() {
        let sales = vec![
            sale("S1", "bukan tanggal", 1000.0, 1),
            sale("S2", "20/20/2025", 2000.0, 2),
            sale("S3", "20/05/2025", 4000.0, 4),
        ];
        let s = summarize(&sales, CalendarDay::new(2025, 5, 20));
        assert_eq!(s.total.revenue, 7000.0);
        assert_eq!(s.total.orders, 7);
        assert_eq!(s.month.revenue, 4000.0);
        assert_eq!(s.day.orders, 4);
    }

    #[test]
    fn test_impossible_day_stays_in_its_month() {
        let sales = vec![
            sale("S1", "31/02/2024", 1500.0, 1),
            sale("S2", "02/03/2024", 3000.0, 2),
        ];
        let february = summarize(&sales, CalendarDay::new(2024, 2, 20));
        assert_eq!(february.month.revenue, 1500.0);
        assert_eq!(february.day, Bucket::default());

        let march = summarize(&sales, CalendarDay::new(2024, 3, 2));
        assert_eq!(march.month.revenue, 3000.0);
        assert_eq!(march.day.orders, 2);
    }

    #[test]
    fn test_empty_sales() {
        let s = summarize(&[], CalendarDay::new(2024, 7, 25));
        assert_eq!(s.total, Bucket::default());
    }
}
