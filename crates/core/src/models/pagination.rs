use serde::{Deserialize, Serialize};

/// Pagination metadata returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub items_per_page: u32,
}

/// The fixed `{data, meta}` envelope all paginated endpoints share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
