//! Bulk import outcome

use serde::{Deserialize, Serialize};

/// Counts returned by a bulk book import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Books created
    pub imported: usize,
    /// CSV rows ignored for having too few fields
    pub skipped: usize,
}
