use crate::PgetError;
use std::fmt;

/// How an index is rendered back into a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    /// Zero-padded to a fixed width, e.g. `007`
    Padded { width: usize },
    /// Plain decimal, no padding
    Unpadded,
}

impl IndexFormat {
    /// Formats `index` according to this format
    ///
    /// # Examples
    ///
    /// ```
    /// use pget::index::IndexFormat;
    ///
    /// assert_eq!(IndexFormat::Padded { width: 3 }.render(7), "007");
    /// assert_eq!(IndexFormat::Padded { width: 3 }.render(1234), "1234");
    /// assert_eq!(IndexFormat::Unpadded.render(7), "7");
    /// ```
    pub fn render(&self, index: i64) -> String {
        match self {
            Self::Padded { width } => format!("{:0width$}", index, width = *width),
            Self::Unpadded => index.to_string(),
        }
    }

    /// Returns true for fixed-width formats
    pub fn is_padded(&self) -> bool {
        matches!(self, Self::Padded { .. })
    }
}

/// printf-style rendering, used in log lines
impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Padded { width } => write!(f, "%0{}d", width),
            Self::Unpadded => write!(f, "%d"),
        }
    }
}

/// The numeric value of a matched index and the format that reproduces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedIndex {
    pub number: i64,
    pub format: IndexFormat,
}

/// Converts matched index digits into a number and padding format
///
/// A run longer than one character that starts with `0` is padded to its own
/// length. Anything else, including a lone `"0"`, is unpadded.
///
/// # Errors
///
/// * `PgetError::Parse` - The digits are not a base-10 `i64`
///
/// # Examples
///
/// ```
/// use pget::index::{resolve_digits, IndexFormat};
///
/// let resolved = resolve_digits("00321").unwrap();
/// assert_eq!(resolved.number, 321);
/// assert_eq!(resolved.format, IndexFormat::Padded { width: 5 });
/// ```
pub fn resolve_digits(digits: &str) -> Result<ResolvedIndex, PgetError> {
    let number = digits.parse::<i64>().map_err(|source| PgetError::Parse {
        digits: digits.to_string(),
        source,
    })?;

    let format = if digits.len() > 1 && digits.starts_with('0') {
        IndexFormat::Padded {
            width: digits.len(),
        }
    } else {
        IndexFormat::Unpadded
    };

    Ok(ResolvedIndex { number, format })
}
