//! Common traits for Tableau resources

use crate::tableau::Pagination;

/// Common trait for listed Tableau resources (projects, datasources, workbooks)
pub trait TableauResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Exact, case-sensitive name match
    fn matches_name(&self, name: &str) -> bool {
        self.name() == name
    }
}

/// Trait for list envelopes such as `{"projects": {"project": [...]}}`
///
/// Implement this for any `XResponse` struct to use it with
/// `TableauClient::fetch_list()`.
pub trait ListResponse<T> {
    /// Consume self and return the items, empty when the envelope is absent
    fn into_items(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn pagination(&self) -> Option<&Pagination>;
}
