//! Conversions from host-supplied signed values into the unsigned counts
//! used throughout the pagination core.

use crate::{PagerError, PagerResult};

/// Convert a signed count (total pages, sibling count, total items) into a
/// `usize`, rejecting negative values.
pub fn count(name: &str, value: i64) -> PagerResult<usize> {
    usize::try_from(value)
        .map_err(|_| PagerError::invalid_input(format!("{name} must be >= 0, got {value}")))
}

/// Convert a signed value that must be strictly positive, such as items per
/// page.
pub fn positive(name: &str, value: i64) -> PagerResult<usize> {
    match count(name, value)? {
        0 => Err(PagerError::invalid_input(format!("{name} must be > 0"))),
        n => Ok(n),
    }
}
