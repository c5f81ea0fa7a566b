use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Zero-based page request sent as `?page=..&size=..`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> PagedList<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.size as u64)
    }

    pub fn has_next(&self) -> bool {
        (self.page as u64 + 1) < self.total_pages()
    }
}
