//! Zero-padding sanity check
//!
//! A seed like `pic_123.jpg` gives no hint whether the site pads smaller
//! indices (`pic_099.jpg`) or not (`pic_99.jpg`). Probing the all-nines
//! boundary one digit shorter, printed at the seed's width, settles it.

use crate::crawler::{probe_existence, Transport};
use crate::index::{digit_length, nearest_shorter_same_length, IndexFormat, ResolvedIndex};
use crate::url::Pattern;
use crate::PgetError;
use url::Url;

/// Probes the nearest shorter boundary of `test_index`, zero-padded to its width
///
/// For `test_index = 123` this probes the URL with index `099`.
///
/// # Returns
///
/// * `Ok(true)` - The padded boundary resource exists
/// * `Ok(false)` - It does not, or `test_index < 10` has no shorter boundary
/// * `Err(PgetError)` - The probe could not be completed
pub async fn probe_shorter_boundary(
    transport: &dyn Transport,
    pattern: &Pattern,
    test_index: i64,
) -> Result<bool, PgetError> {
    let Some(boundary) = nearest_shorter_same_length(test_index) else {
        return Ok(false);
    };

    let width = digit_length(test_index);
    let digits = IndexFormat::Padded { width }.render(boundary);
    let url = Url::parse(&pattern.url_for(&digits))?;

    tracing::debug!("Checking padding with {}", url);
    probe_existence(transport, &url).await
}

/// Switches an unpadded format to fixed width when the site pads indices
///
/// Only an unpadded match longer than one digit is checked; a probe failure
/// keeps the format as resolved.
pub async fn verify_padding(
    transport: &dyn Transport,
    pattern: &Pattern,
    resolved: ResolvedIndex,
) -> ResolvedIndex {
    if resolved.format.is_padded() || pattern.matched.len() < 2 {
        return resolved;
    }

    match probe_shorter_boundary(transport, pattern, resolved.number).await {
        Ok(true) => {
            let format = IndexFormat::Padded {
                width: pattern.matched.len(),
            };
            tracing::info!("Padded boundary exists, switching to {}", format);
            ResolvedIndex { format, ..resolved }
        }
        Ok(false) => resolved,
        Err(e) => {
            tracing::warn!("Padding check failed, keeping {}: {}", resolved.format, e);
            resolved
        }
    }
}
