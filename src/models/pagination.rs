//! Page/size pagination over already-loaded sequences

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Pagination query parameters. Missing or non-positive values fall back
/// to page 1 and [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageQuery {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(1)
    }

    pub fn size(&self) -> i64 {
        self.size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// One page of results with navigation data
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Cut the requested page out of `all`. Pages past the end are empty.
    pub fn from_vec(all: Vec<T>, query: &PageQuery) -> Self {
        let page = query.page();
        let size = query.size();
        let total = all.len() as i64;

        let start = (page - 1).saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        let total_pages = (total + size - 1) / size;

        let items = all
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect();

        Self {
            items,
            page,
            size,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}
