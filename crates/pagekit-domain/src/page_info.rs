//! "Showing X–Y of N" metadata for the page currently displayed.

use pagekit_core::{PagerError, PagerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based, inclusive item span shown on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageInfo {
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            total: 0,
        }
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}–{} of {}", self.start, self.end, self.total)
    }
}

/// Compute the item span for `current_page`.
///
/// Returns `Ok(None)` when either optional input is absent, since page info is
/// display metadata the host may not provide.
///
/// A page past the last item is not clamped: `start` then exceeds `end`
/// (page 5 of 25 items at 10 per page gives `41–25`). Callers keep the page in
/// range through [`crate::PageController`].
pub fn format(
    current_page: usize,
    items_per_page: Option<usize>,
    total_items: Option<usize>,
) -> PagerResult<Option<PageInfo>> {
    let (Some(items_per_page), Some(total_items)) = (items_per_page, total_items) else {
        return Ok(None);
    };
    if items_per_page == 0 {
        return Err(PagerError::invalid_input("items per page must be > 0"));
    }
    if current_page == 0 {
        return Err(PagerError::invalid_input("current page must be >= 1"));
    }
    if total_items == 0 {
        return Ok(Some(PageInfo::empty()));
    }

    let start = (current_page - 1)
        .saturating_mul(items_per_page)
        .saturating_add(1);
    let end = current_page
        .saturating_mul(items_per_page)
        .min(total_items);

    Ok(Some(PageInfo {
        start,
        end,
        total: total_items,
    }))
}
