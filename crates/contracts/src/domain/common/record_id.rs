/// Minimum number of digits in a generated identifier ("P001")
pub const ID_DIGITS: usize = 3;

/// Numeric part of an identifier carrying the given prefix.
///
/// `numeric_suffix("B010", "B") == Some(10)`; identifiers with another prefix or a
/// non-numeric tail yield `None`.
pub fn numeric_suffix(id: &str, prefix: &str) -> Option<u32> {
    id.strip_prefix(prefix)?.parse().ok()
}

/// Next identifier for a collection: prefix + (largest numeric suffix + 1).
///
/// The result is strictly greater than every parsable suffix, so it never equals an
/// existing identifier.
pub fn next_record_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let next = existing
        .into_iter()
        .filter_map(|id| numeric_suffix(id, prefix))
        .max()
        .map_or(1, |max| max + 1);
    format!("{prefix}{next:0width$}", width = ID_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(numeric_suffix("B010", "B"), Some(10));
        assert_eq!(numeric_suffix("U003", "U"), Some(3));
        assert_eq!(numeric_suffix("U003", "P"), None);
        assert_eq!(numeric_suffix("Pabc", "P"), None);
    }

    #[test]
    fn test_next_record_id_continues_after_max() {
        let ids = ["U001", "U003", "U002"];
        assert_eq!(next_record_id("U", ids), "U004");
    }

    #[test]
    fn test_next_record_id_empty_collection() {
        assert_eq!(next_record_id("P", std::iter::empty()), "P001");
    }

    #[test]
    fn test_next_record_id_ignores_foreign_ids() {
        let ids = ["B010", "X999", "legacy"];
        assert_eq!(next_record_id("B", ids), "B011");
    }

    #[test]
    fn test_next_record_id_grows_past_padding() {
        let ids = ["P999"];
        assert_eq!(next_record_id("P", ids), "P1000");
    }
}
