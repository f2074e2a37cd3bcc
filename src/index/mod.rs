//! Index resolution
//!
//! Turns the digits found in a URL into a number plus the zero-padding format
//! needed to print neighbouring indices the same way.

mod digits;
mod format;

pub use digits::{digit_length, nearest_shorter_same_length};
pub use format::{resolve_digits, IndexFormat, ResolvedIndex};

use crate::url::Pattern;
use crate::PgetError;

/// Resolves the index of a pattern
///
/// # Errors
///
/// * `PgetError::Parse` - The matched digits do not fit an `i64`
pub fn resolve(pattern: &Pattern) -> Result<ResolvedIndex, PgetError> {
    resolve_digits(&pattern.matched)
}
