//! Static pagination ornament of the list pages
//!
//! The ornament only describes what the controls show. It never slices the rows it
//! decorates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    /// "Showing 1-5 of 29" with numbered page buttons
    Numbered,
    /// "1-5 of 29" with previous/next arrows only
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    Number(usize),
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOrnament {
    pub style: PaginationStyle,
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// Last page button; part of the ornament, not derived from the rows
    pub page_count: usize,
}

impl PaginationOrnament {
    /// Example state shown under every table: page 1 of 8, items 1-5 of 29
    pub const fn example(style: PaginationStyle) -> Self {
        Self {
            style,
            current_page: 1,
            page_size: 5,
            total_items: 29,
            page_count: 8,
        }
    }

    /// First and last 1-based item number of the current page
    pub fn range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = self.current_page.saturating_sub(1) * self.page_size + 1;
        let end = (start + self.page_size - 1).min(self.total_items);
        (start, end)
    }

    pub fn summary(&self) -> String {
        let (start, end) = self.range();
        match self.style {
            PaginationStyle::Numbered => format!("Showing {start}-{end} of {}", self.total_items),
            PaginationStyle::Compact => format!("{start}-{end} of {}", self.total_items),
        }
    }

    /// Page buttons: the first three pages, an ellipsis, then the last page
    pub fn marks(&self) -> Vec<PageMark> {
        let total = self.page_count.max(1);
        if total <= 4 {
            return (1..=total).map(PageMark::Number).collect();
        }
        let mut marks: Vec<PageMark> = (1..=3).map(PageMark::Number).collect();
        marks.push(PageMark::Ellipsis);
        marks.push(PageMark::Number(total));
        marks
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_example() {
        let ornament = PaginationOrnament::example(PaginationStyle::Numbered);
        assert_eq!(ornament.summary(), "Showing 1-5 of 29");
        assert_eq!(
            ornament.marks(),
            vec![
                PageMark::Number(1),
                PageMark::Number(2),
                PageMark::Number(3),
                PageMark::Ellipsis,
                PageMark::Number(8),
            ]
        );
        assert!(!ornament.has_previous());
        assert!(ornament.has_next());
    }

    #[test]
    fn test_compact_example() {
        let ornament = PaginationOrnament::example(PaginationStyle::Compact);
        assert_eq!(ornament.summary(), "1-5 of 29");
    }

    #[test]
    fn test_small_page_count() {
        let ornament = PaginationOrnament {
            style: PaginationStyle::Numbered,
            current_page: 2,
            page_size: 10,
            total_items: 15,
            page_count: 2,
        };
        assert_eq!(ornament.range(), (11, 15));
        assert_eq!(ornament.marks(), vec![PageMark::Number(1), PageMark::Number(2)]);
        assert!(ornament.has_previous());
        assert!(!ornament.has_next());
    }
}
