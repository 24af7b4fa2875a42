use serde::{Deserialize, Serialize};

use crate::shared::date_utils::CalendarDay;
use crate::shared::search::Searchable;

/// Revenue and order count of one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Summed price
    pub revenue: f64,
    /// Summed product quantity
    pub orders: u64,
}

impl Bucket {
    pub fn add(&mut self, revenue: f64, orders: u64) {
        self.revenue += revenue;
        self.orders += orders;
    }

    /// "0.1k pesanan": thousands with one decimal
    pub fn orders_label_thousands(&self) -> String {
        format!("{:.1}k pesanan", self.orders as f64 / 1000.0)
    }
}

/// Dashboard totals for one reference date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub reference: CalendarDay,
    /// Every record, including those with unparseable dates
    pub total: Bucket,
    /// Records in the reference month and year
    pub month: Bucket,
    /// Records on the reference day
    pub day: Bucket,
}

impl RevenueSummary {
    /// "Pendapatan Bulan Juli"
    pub fn month_title(&self) -> String {
        format!("Pendapatan Bulan {}", self.reference.month_name())
    }

    /// "Pendapatan Kamis, 25 Juli"
    pub fn day_title(&self) -> String {
        match self.reference.weekday_name() {
            Some(weekday) => format!(
                "Pendapatan {weekday}, {} {}",
                self.reference.day,
                self.reference.month_name()
            ),
            None => format!(
                "Pendapatan {} {}",
                self.reference.day,
                self.reference.month_name()
            ),
        }
    }
}

// ============================================================================
// Dashboard extras
// ============================================================================

/// Row of the "top products by interest" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub clicks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: String,
    pub sender: String,
    pub subject: String,
    /// Display date ("17 Oct, 2024")
    pub date: String,
    pub read: bool,
}

impl Searchable for InboxMessage {
    fn search_fields(&self) -> Vec<String> {
        vec![self.sender.clone(), self.subject.clone(), self.date.clone()]
    }
}

/// Tabs of the dashboard inbox; unread questions are "incoming"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InboxTab {
    #[default]
    Incoming,
    Done,
}

impl InboxTab {
    pub const ALL: [InboxTab; 2] = [InboxTab::Incoming, InboxTab::Done];

    pub fn label(&self) -> &'static str {
        match self {
            InboxTab::Incoming => "Pertanyaan Masuk",
            InboxTab::Done => "Selesai",
        }
    }

    pub fn contains(&self, message: &InboxMessage) -> bool {
        match self {
            InboxTab::Incoming => !message.read,
            InboxTab::Done => message.read,
        }
    }
}

/// Slice of the visitor donut chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorShare {
    pub label: String,
    pub value: f64,
    /// CSS color, e.g. "#0d9488"
    pub color: String,
}

/// Drawn arc of a donut slice, in SVG stroke-dasharray terms
#[derive(Debug, Clone, PartialEq)]
pub struct DonutArc {
    pub label: String,
    pub color: String,
    /// Share of the whole, 0..=100
    pub percent: f64,
    /// Stroke length along the circumference
    pub length: f64,
    /// Offset where the arc starts
    pub offset: f64,
}

/// Lay the slices out around a circle of the given circumference
pub fn donut_arcs(shares: &[VisitorShare], circumference: f64) -> Vec<DonutArc> {
    let total: f64 = shares.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    shares
        .iter()
        .map(|share| {
            let fraction = share.value / total;
            let arc = DonutArc {
                label: share.label.clone(),
                color: share.color.clone(),
                percent: fraction * 100.0,
                length: fraction * circumference,
                offset: start,
            };
            start += arc.length;
            arc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_label_thousands() {
        let bucket = Bucket {
            revenue: 0.0,
            orders: 53,
        };
        assert_eq!(bucket.orders_label_thousands(), "0.1k pesanan");
    }

    #[test]
    fn test_titles() {
        let summary = RevenueSummary {
            reference: CalendarDay::new(2024, 7, 25),
            total: Bucket::default(),
            month: Bucket::default(),
            day: Bucket::default(),
        };
        assert_eq!(summary.month_title(), "Pendapatan Bulan Juli");
        assert_eq!(summary.day_title(), "Pendapatan Kamis, 25 Juli");
    }

    #[test]
    fn test_inbox_tabs_split_on_read_flag() {
        let message = |read| InboxMessage {
            id: "1".into(),
            sender: "Naimur Rahman".into(),
            subject: "Lorem ipsum".into(),
            date: "25 Nov, 2024".into(),
            read,
        };
        assert_eq!(InboxTab::default(), InboxTab::Incoming);
        assert!(InboxTab::Incoming.contains(&message(false)));
        assert!(!InboxTab::Incoming.contains(&message(true)));
        assert!(InboxTab::Done.contains(&message(true)));
        assert!(message(false).matches_filter("naimur"));
    }

    #[test]
    fn test_donut_arcs() {
        let shares = vec![
            VisitorShare {
                label: "Desktop".into(),
                value: 3.0,
                color: "#0d9488".into(),
            },
            VisitorShare {
                label: "Mobile".into(),
                value: 1.0,
                color: "#f97316".into(),
            },
        ];
        let arcs = donut_arcs(&shares, 100.0);
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].length, 75.0);
        assert_eq!(arcs[1].offset, 75.0);
        assert_eq!(arcs[1].percent, 25.0);
        assert!(donut_arcs(&[], 100.0).is_empty());
    }
}
