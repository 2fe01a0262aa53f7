//! One module per consumed resource, mirroring the backend's URL structure.

pub mod admin;
pub mod appointments;
pub mod clients;
pub mod employees;
pub mod profile;
pub mod public;
pub mod reports;
pub mod services;

/// Pagination and search parameters shared by every searchable list
/// endpoint (`page`/`limit`/`search` query params).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-indexed page number.
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            search: search.into(),
        }
    }

    /// Query pairs for the request; an empty search term is omitted rather
    /// than sent as `search=`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }
}
