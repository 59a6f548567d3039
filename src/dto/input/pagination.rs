use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 0
    ///
    pub page_idx: u32,
    pub page_size: u32,
}
