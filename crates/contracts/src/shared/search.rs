/// Search over list rows
///
/// A row matches when any of its display fields contains the query,
/// case-insensitively. A blank query matches everything.
pub trait Searchable {
    /// Values shown in the row's columns
    fn search_fields(&self) -> Vec<String>;

    /// Checks whether the row matches the query
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Rows matching the query, in their original order
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    const ROWS: [Row; 3] = [
        Row("Basreng bakar by Hilni", "Mandiri"),
        Row("Warung Seblak Teh Euis", "BCA"),
        Row("Kopi Senja Abadi", "BRI"),
    ];

    #[test]
    fn test_blank_query_returns_all() {
        assert_eq!(filter_list(&ROWS, "").len(), 3);
        assert_eq!(filter_list(&ROWS, "   ").len(), 3);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let found = filter_list(&ROWS, "SEBLAK");
        assert_eq!(found, vec![ROWS[1].clone()]);

        let by_bank = filter_list(&ROWS, "br");
        assert_eq!(by_bank.len(), 2);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_list(&ROWS, "martabak").is_empty());
    }
}
