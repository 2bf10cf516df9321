//! Page range computation.
//!
//! Maps `(current_page, total_pages, sibling_count)` to the ordered sequence
//! of markers a pagination control displays. Pure and framework-agnostic:
//! renderers draw one element per marker and treat [`PageMarker::Ellipsis`]
//! as non-interactive.

use pagekit_core::{PagerError, PagerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pages always shown besides the sibling window: first, last, current and
/// the two slots an ellipsis may occupy.
const FIXED_SLOTS: usize = 5;

/// One displayed unit of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageMarker {
    /// A concrete, 1-based page.
    Page { index: usize },
    /// Placeholder for one or more hidden, contiguous pages.
    Ellipsis,
}

impl PageMarker {
    pub fn page(index: usize) -> Self {
        Self::Page { index }
    }

    /// The page number, or `None` for an ellipsis.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Page { index } => Some(*index),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { index } => write!(f, "{index}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Ordered, immutable sequence of page markers.
///
/// An empty range means no pagination is needed (zero or one page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRange(Vec<PageMarker>);

impl PageRange {
    pub fn markers(&self) -> &[PageMarker] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageMarker> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&PageMarker> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&PageMarker> {
        self.0.last()
    }

    /// Page numbers in display order, skipping ellipses.
    pub fn pages(&self) -> Vec<usize> {
        self.0.iter().filter_map(PageMarker::index).collect()
    }

    pub fn has_ellipsis(&self) -> bool {
        self.0.iter().any(PageMarker::is_ellipsis)
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.0.contains(&PageMarker::page(page))
    }
}

impl<'a> IntoIterator for &'a PageRange {
    type Item = &'a PageMarker;
    type IntoIter = std::slice::Iter<'a, PageMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, marker) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

/// Compute the markers to display for `current_page` out of `total_pages`.
///
/// Returns an empty range when `total_pages <= 1`. Fails with
/// [`PagerError::InvalidInput`] when `current_page` lies outside
/// `[1, total_pages]`; callers clamp before calling. A `total_pages` of zero
/// is inert and accepts any `current_page`.
pub fn compute(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
) -> PagerResult<PageRange> {
    if total_pages == 0 {
        return Ok(PageRange::default());
    }
    if current_page == 0 || current_page > total_pages {
        return Err(PagerError::invalid_input(format!(
            "current page {current_page} is outside 1..={total_pages}"
        )));
    }
    if total_pages == 1 {
        return Ok(PageRange::default());
    }

    let window_size = sibling_count.saturating_mul(2).saturating_add(FIXED_SLOTS);
    if total_pages <= window_size {
        return Ok(PageRange((1..=total_pages).map(PageMarker::page).collect()));
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page
        .saturating_add(sibling_count)
        .min(total_pages);

    // The right-hand threshold is one page wider than the left one: a single
    // hidden page after the window is shown as a page, never as an ellipsis.
    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 2;

    // Contiguous run shown on the truncated side's opposite end.
    let edge_count = window_size - 2;

    // Neither side truncated means the whole range fits the window, which
    // returned above, so the fallthrough branch is always right-only.
    let markers = if show_left_ellipsis && show_right_ellipsis {
        [PageMarker::page(1), PageMarker::Ellipsis]
            .into_iter()
            .chain((left_sibling..=right_sibling).map(PageMarker::page))
            .chain([PageMarker::Ellipsis, PageMarker::page(total_pages)])
            .collect()
    } else if show_left_ellipsis {
        [PageMarker::page(1), PageMarker::Ellipsis]
            .into_iter()
            .chain((total_pages - edge_count + 1..=total_pages).map(PageMarker::page))
            .collect()
    } else {
        (1..=edge_count)
            .map(PageMarker::page)
            .chain([PageMarker::Ellipsis, PageMarker::page(total_pages)])
            .collect()
    };

    Ok(PageRange(markers))
}

/// Single-entry memo over [`compute`], keyed on its three arguments.
#[derive(Debug, Clone, Default)]
pub struct RangeMemo {
    key: Option<(usize, usize, usize)>,
    range: PageRange,
}

impl RangeMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the range for the given arguments, recomputing only when they
    /// differ from the previous call.
    pub fn get(
        &mut self,
        current_page: usize,
        total_pages: usize,
        sibling_count: usize,
    ) -> PagerResult<&PageRange> {
        let key = (current_page, total_pages, sibling_count);
        if self.key != Some(key) {
            self.range = compute(current_page, total_pages, sibling_count)?;
            self.key = Some(key);
        }
        Ok(&self.range)
    }

    pub fn is_cached(&self, current_page: usize, total_pages: usize, sibling_count: usize) -> bool {
        self.key == Some((current_page, total_pages, sibling_count))
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.range = PageRange::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: PageMarker = PageMarker::Ellipsis;

    fn p(index: usize) -> PageMarker {
        PageMarker::page(index)
    }

    fn range(current: usize, total: usize, siblings: usize) -> Vec<PageMarker> {
        compute(current, total, siblings).unwrap().markers().to_vec()
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert!(compute(1, 0, 1).unwrap().is_empty());
        assert!(compute(0, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_single_page_is_empty() {
        assert!(compute(1, 1, 1).unwrap().is_empty());
        assert!(compute(1, 1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_current_page_out_of_range_is_invalid() {
        assert!(matches!(compute(0, 10, 1), Err(PagerError::InvalidInput(_))));
        assert!(matches!(compute(11, 10, 1), Err(PagerError::InvalidInput(_))));
        assert!(matches!(compute(2, 1, 1), Err(PagerError::InvalidInput(_))));
    }

    #[test]
    fn test_fits_without_truncation() {
        assert_eq!(range(3, 5, 1), vec![p(1), p(2), p(3), p(4), p(5)]);
        assert_eq!(range(1, 7, 1), (1..=7).map(p).collect::<Vec<_>>());
    }

    #[test]
    fn test_everything_fits_for_any_page_within_window() {
        for siblings in 0..4 {
            let window = 2 * siblings + 5;
            for total in 2..=window {
                for current in 1..=total {
                    let r = compute(current, total, siblings).unwrap();
                    assert!(!r.has_ellipsis());
                    assert_eq!(r.pages(), (1..=total).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn test_first_page_truncates_right() {
        assert_eq!(range(1, 10, 1), vec![p(1), p(2), p(3), p(4), p(5), E, p(10)]);
    }

    #[test]
    fn test_last_page_truncates_left() {
        assert_eq!(range(10, 10, 1), vec![p(1), E, p(6), p(7), p(8), p(9), p(10)]);
    }

    #[test]
    fn test_middle_page_truncates_both() {
        assert_eq!(range(5, 10, 1), vec![p(1), E, p(4), p(5), p(6), E, p(10)]);
    }

    #[test]
    fn test_left_ellipsis_may_hide_a_single_page() {
        // left sibling is 3, so only page 2 is hidden on the left
        assert_eq!(range(4, 10, 1), vec![p(1), E, p(3), p(4), p(5), E, p(10)]);
    }

    #[test]
    fn test_right_side_never_hides_a_single_page() {
        // right sibling is 8: page 9 alone would be hidden, so the tail is shown
        assert_eq!(range(7, 10, 1), vec![p(1), E, p(6), p(7), p(8), p(9), p(10)]);
        assert_eq!(range(6, 10, 1), vec![p(1), E, p(5), p(6), p(7), E, p(10)]);
    }

    #[test]
    fn test_zero_siblings() {
        assert_eq!(range(1, 10, 0), vec![p(1), p(2), p(3), E, p(10)]);
        assert_eq!(range(5, 10, 0), vec![p(1), E, p(5), E, p(10)]);
        assert_eq!(range(10, 10, 0), vec![p(1), E, p(8), p(9), p(10)]);
    }

    #[test]
    fn test_two_siblings() {
        assert_eq!(
            range(10, 20, 2),
            vec![p(1), E, p(8), p(9), p(10), p(11), p(12), E, p(20)]
        );
        assert_eq!(
            range(2, 20, 2),
            vec![p(1), p(2), p(3), p(4), p(5), p(6), p(7), E, p(20)]
        );
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        assert!(!compute(usize::MAX / 2, usize::MAX, 1).unwrap().is_empty());

        let r = compute(usize::MAX, usize::MAX, 1).unwrap();
        assert_eq!(r.first(), Some(&p(1)));
        assert_eq!(r.last(), Some(&p(usize::MAX)));
    }

    #[test]
    fn test_truncated_ranges_start_and_end_with_bounds() {
        for siblings in 0..3 {
            for total in 8..40 {
                for current in 1..=total {
                    let r = compute(current, total, siblings).unwrap();
                    if r.has_ellipsis() {
                        assert_eq!(r.first(), Some(&p(1)));
                        assert_eq!(r.last(), Some(&p(total)));
                    }
                    assert!(r.contains_page(current), "page {current} of {total}");
                }
            }
        }
    }

    #[test]
    fn test_ranges_are_strictly_increasing_without_adjacent_ellipses() {
        for siblings in 0..3 {
            for total in 2..30 {
                for current in 1..=total {
                    let r = compute(current, total, siblings).unwrap();
                    let pages = r.pages();
                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                    assert!(r
                        .markers()
                        .windows(2)
                        .all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())));
                }
            }
        }
    }

    #[test]
    fn test_sibling_window_moves_one_step_at_a_time() {
        let total = 20;
        for current in 5..=15 {
            let here = compute(current, total, 1).unwrap();
            let next = compute(current + 1, total, 1).unwrap();
            assert!(here.has_ellipsis() && next.has_ellipsis());
            assert_eq!(here.pages()[1] + 1, next.pages()[1]);
        }
        assert_eq!(
            range(5, total, 1),
            vec![p(1), E, p(4), p(5), p(6), E, p(20)]
        );
        assert_eq!(
            range(6, total, 1),
            vec![p(1), E, p(5), p(6), p(7), E, p(20)]
        );
    }

    /// Asserts the flags switch at most once, from `before` to `!before`.
    fn assert_switches_once(flags: &[bool], before: bool, what: &str) {
        let switch = flags.iter().position(|&f| f != before).unwrap_or(flags.len());
        assert!(
            flags[switch..].iter().all(|&f| f != before),
            "{what} flickers: {flags:?}"
        );
    }

    #[test]
    fn test_ellipsis_does_not_flicker() {
        for siblings in 0..4 {
            for total in 6..40 {
                let ranges: Vec<PageRange> = (1..=total)
                    .map(|c| compute(c, total, siblings).unwrap())
                    .collect();

                // once the left ellipsis appears it stays for every later page
                let left: Vec<bool> = ranges
                    .iter()
                    .map(|r| r.len() > 1 && r.markers()[1].is_ellipsis())
                    .collect();
                assert_switches_once(&left, false, "left ellipsis");

                // once the right ellipsis disappears it stays gone
                let right: Vec<bool> = ranges
                    .iter()
                    .map(|r| r.len() > 1 && r.markers()[r.len() - 2].is_ellipsis())
                    .collect();
                assert_switches_once(&right, right[0], "right ellipsis");
                assert!(!right[total - 1]);
            }
        }
    }

    #[test]
    fn test_right_ellipsis_disappears_at_fixed_page() {
        let right_shown: Vec<bool> = (1..=20)
            .map(|c| compute(c, 20, 1).unwrap().markers()[5].is_ellipsis())
            .collect();
        // right sibling reaches 18 (total - 2) at page 17
        assert!(right_shown[..16].iter().all(|&shown| shown));
        assert!(right_shown[16..].iter().all(|&shown| !shown));
    }

    #[test]
    fn test_compute_is_deterministic() {
        assert_eq!(compute(7, 42, 2).unwrap(), compute(7, 42, 2).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(compute(5, 10, 1).unwrap().to_string(), "1 … 4 5 6 … 10");
        assert_eq!(compute(1, 1, 1).unwrap().to_string(), "");
    }

    #[test]
    fn test_serialize_markers() {
        let json = serde_json::to_string(&compute(1, 10, 0).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"page","index":1},{"type":"page","index":2},{"type":"page","index":3},{"type":"ellipsis"},{"type":"page","index":10}]"#
        );
    }

    #[test]
    fn test_memo_reuses_until_key_changes() {
        let mut memo = RangeMemo::new();
        assert!(!memo.is_cached(5, 10, 1));

        let first = memo.get(5, 10, 1).unwrap().clone();
        assert!(memo.is_cached(5, 10, 1));
        assert_eq!(memo.get(5, 10, 1).unwrap(), &first);

        let moved = memo.get(6, 10, 1).unwrap().clone();
        assert_ne!(moved, first);
        assert!(!memo.is_cached(5, 10, 1));

        memo.clear();
        assert!(!memo.is_cached(6, 10, 1));
    }

    #[test]
    fn test_memo_propagates_invalid_input() {
        let mut memo = RangeMemo::new();
        assert!(memo.get(0, 10, 1).is_err());
        assert!(!memo.is_cached(0, 10, 1));
    }
}
