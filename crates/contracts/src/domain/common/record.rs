/// Trait for the records held by list pages and repositories
///
/// Defines the identity and UI metadata shared by every entity of the dashboard.
/// Records are value objects: an edit produces a new value that replaces the old
/// one wholesale.
pub trait Record: Clone {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record identifier (e.g. "P001")
    fn id(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the entity in the system (e.g. "a001")
    fn entity_index() -> &'static str;

    /// Collection name (e.g. "product")
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Produk")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Daftar Produk")
    fn list_name() -> &'static str;

    /// Prefix of generated identifiers (e.g. "P")
    fn id_prefix() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full entity name used in logs (e.g. "a001_product")
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }
}
