//! Stateful page navigation.
//!
//! [`PageController`] owns the current page of one pagination control and
//! exposes clamped navigation. Navigation never fails: requests that would
//! not change the page, or arrive while the control is locked, are ignored.

use crate::page_info::{self, PageInfo};
use crate::range::{self, PageRange};
use pagekit_core::config::DEFAULT_SIBLING_COUNT;
use pagekit_core::{validate, LogEntry, Loggable, PagerError, PagerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page changes kept in the navigation history before the oldest is dropped.
pub const MAX_HISTORY: usize = 100;

/// Receives the new page after every committed page change.
#[cfg_attr(test, mockall::automock)]
pub trait PageChangeListener {
    fn on_page_change(&mut self, page: usize);
}

impl<F> PageChangeListener for F
where
    F: FnMut(usize),
{
    fn on_page_change(&mut self, page: usize) {
        self(page)
    }
}

/// Host-supplied pagination inputs, as received from an untyped boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationProps {
    #[serde(default = "default_current_page")]
    pub current_page: i64,
    pub total_pages: i64,
    #[serde(default = "default_sibling_count")]
    pub sibling_count: i64,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub disabled: bool,
}

fn default_current_page() -> i64 {
    1
}

fn default_sibling_count() -> i64 {
    DEFAULT_SIBLING_COUNT as i64
}

impl PaginationProps {
    pub fn new(total_pages: i64) -> Self {
        Self {
            current_page: default_current_page(),
            total_pages,
            sibling_count: default_sibling_count(),
            loading: false,
            disabled: false,
        }
    }
}

pub struct PageController {
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
    loading: bool,
    disabled: bool,
    listeners: Vec<Box<dyn PageChangeListener>>,
    history: Vec<LogEntry>,
    history_limit: usize,
}

impl PageController {
    /// Create a controller on page 1 with the default sibling count.
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 1,
            total_pages,
            sibling_count: DEFAULT_SIBLING_COUNT,
            loading: false,
            disabled: false,
            listeners: Vec::new(),
            history: Vec::new(),
            history_limit: MAX_HISTORY,
        }
    }

    /// Build a controller from host props, rejecting negative counts and
    /// non-positive pages. A current page past the end is clamped.
    pub fn from_props(props: PaginationProps) -> PagerResult<Self> {
        let total_pages = validate::count("total_pages", props.total_pages)?;
        let sibling_count = validate::count("sibling_count", props.sibling_count)?;
        if props.current_page < 1 {
            return Err(PagerError::invalid_input(format!(
                "current_page must be >= 1, got {}",
                props.current_page
            )));
        }
        let current_page = usize::try_from(props.current_page).unwrap_or(usize::MAX);

        let mut controller = Self::new(total_pages)
            .with_sibling_count(sibling_count)
            .with_initial_page(current_page);
        controller.loading = props.loading;
        controller.disabled = props.disabled;
        Ok(controller)
    }

    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Keep at most `limit` history entries. Zero disables history.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.history.truncate(limit);
        self
    }

    /// Start on `page`, clamped into `[1, total_pages]`.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.current_page = self.clamp_page(page);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// No pages: nothing to show and nothing to navigate.
    pub fn is_inert(&self) -> bool {
        self.total_pages == 0
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_sibling_count(&mut self, sibling_count: usize) {
        self.sibling_count = sibling_count;
    }

    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: PageChangeListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Markers to display for the current state.
    pub fn range(&self) -> PageRange {
        // current_page is kept within [1, total_pages], so compute cannot fail
        range::compute(self.current_page, self.total_pages, self.sibling_count)
            .unwrap_or_default()
    }

    pub fn page_info(
        &self,
        items_per_page: Option<usize>,
        total_items: Option<usize>,
    ) -> PagerResult<Option<PageInfo>> {
        page_info::format(self.current_page, items_per_page, total_items)
    }

    pub fn can_previous(&self) -> bool {
        self.is_interactive() && self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.is_interactive() && self.current_page < self.total_pages
    }

    /// Move to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if self.is_inert() {
            tracing::trace!(page, "ignoring navigation: no pages");
            return false;
        }
        if self.loading || self.disabled {
            tracing::debug!(
                page,
                loading = self.loading,
                disabled = self.disabled,
                "ignoring navigation while locked"
            );
            return false;
        }

        let target = self.clamp_page(page);
        if target == self.current_page {
            tracing::trace!(page, target, "ignoring navigation to current page");
            return false;
        }

        self.commit(target);
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages)
    }

    /// Update the page count, pulling the current page back into range when
    /// it no longer exists. Applies even while locked.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        let clamped = self.clamp_page(self.current_page);
        if clamped != self.current_page {
            tracing::debug!(
                from = self.current_page,
                to = clamped,
                total_pages,
                "clamping current page after page count change"
            );
            self.commit(clamped);
        }
    }

    fn is_interactive(&self) -> bool {
        !self.is_inert() && !self.loading && !self.disabled
    }

    /// Clamp into `[1, total_pages]`, or to 1 when there are no pages.
    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages.max(1))
    }

    fn commit(&mut self, page: usize) {
        let previous = self.current_page;
        self.current_page = page;
        self.add_log(LogEntry::page_change(previous, page));
        for listener in &mut self.listeners {
            listener.on_page_change(page);
        }
    }
}

impl Loggable for PageController {
    fn add_log(&mut self, entry: LogEntry) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() >= self.history_limit {
            let overflow = self.history.len() + 1 - self.history_limit;
            self.history.drain(..overflow);
        }
        self.history.push(entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.history
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("sibling_count", &self.sibling_count)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
