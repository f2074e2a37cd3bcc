use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+").expect("digit run regex is valid") // Static pattern, safe to panic
});

static PERCENT_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%[0-9A-Fa-f]{2}").expect("percent escape regex is valid") // Static pattern, safe to panic
});

/// A string split around its last run of ASCII digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMatch<'a> {
    /// Text before the digit run
    pub before: &'a str,
    /// The digit run, leading zeros preserved
    pub digits: &'a str,
    /// Text after the digit run; any digits left belong to percent escapes
    pub after: &'a str,
}

/// Finds the last maximal run of ASCII digits in `candidate`
///
/// Hex digits of a percent escape are not part of a run: in `pic%201.jpg`
/// the `20` encodes a space and the index is `1`.
///
/// # Returns
///
/// * `Some(IndexMatch)` - `before + digits + after == candidate`
/// * `None` - The candidate contains no digits
///
/// # Examples
///
/// ```
/// use pget::url::extract_index;
///
/// let m = extract_index("pic_2020_023.jpg").unwrap();
/// assert_eq!(m.before, "pic_2020_");
/// assert_eq!(m.digits, "023");
/// assert_eq!(m.after, ".jpg");
///
/// assert!(extract_index("pic_XX.jpg").is_none());
/// ```
pub fn extract_index(candidate: &str) -> Option<IndexMatch<'_>> {
    let escapes: Vec<Range<usize>> = PERCENT_ESCAPE
        .find_iter(candidate)
        .map(|m| m.range())
        .collect();

    // An escape can only overlap the head of a run, since it starts with `%`
    let run = DIGIT_RUN
        .find_iter(candidate)
        .filter_map(|run| {
            let start = escapes
                .iter()
                .find(|escape| escape.contains(&run.start()))
                .map_or(run.start(), |escape| escape.end);
            (start < run.end()).then_some(start..run.end())
        })
        .last()?;

    Some(IndexMatch {
        before: &candidate[..run.start],
        digits: &candidate[run.clone()],
        after: &candidate[run.end..],
    })
}
