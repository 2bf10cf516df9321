pub mod controller;
pub mod page_info;
pub mod range;

pub use controller::{PageChangeListener, PageController, PaginationProps, MAX_HISTORY};
pub use page_info::PageInfo;
pub use range::{PageMarker, PageRange, RangeMemo};
