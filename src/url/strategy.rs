//! The three places an index may live, tried in order of specificity

use super::matcher::extract_index;
use super::raw::RawUrl;
use super::{Pattern, PatternLocation};

/// A pure extraction attempt against one URL component
pub(crate) type Strategy = fn(&RawUrl<'_>) -> Option<Pattern>;

/// File name, then query string, then the whole path
pub(crate) const STRATEGIES: [Strategy; 3] = [from_file_name, from_query, from_path];

fn from_file_name(raw: &RawUrl<'_>) -> Option<Pattern> {
    let (directory, file) = raw.split_file_name();
    let m = extract_index(file)?;
    Some(Pattern {
        prefix: format!("{}{}{}", raw.origin, directory, m.before),
        matched: m.digits.to_string(),
        suffix: format!("{}{}{}", m.after, raw.query_tail(), raw.fragment_tail()),
        location: PatternLocation::FileName,
    })
}

fn from_query(raw: &RawUrl<'_>) -> Option<Pattern> {
    let m = extract_index(raw.query?)?;
    Some(Pattern {
        prefix: format!("{}{}?{}", raw.origin, raw.path, m.before),
        matched: m.digits.to_string(),
        suffix: format!("{}{}", m.after, raw.fragment_tail()),
        location: PatternLocation::Query,
    })
}

fn from_path(raw: &RawUrl<'_>) -> Option<Pattern> {
    let m = extract_index(raw.path)?;
    Some(Pattern {
        prefix: format!("{}{}", raw.origin, m.before),
        matched: m.digits.to_string(),
        suffix: format!("{}{}{}", m.after, raw.query_tail(), raw.fragment_tail()),
        location: PatternLocation::Path,
    })
}
