use crate::{UrlError, UrlResult};
use url::Url;

/// A seed URL split into its textual components
///
/// The `url` crate is only used to validate the input. All components borrow
/// the original text so that reassembling them reproduces the input byte for
/// byte (case, percent-encoding and empty `?` are left exactly as typed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawUrl<'a> {
    /// `scheme://authority`
    pub origin: &'a str,
    /// Path including its leading slash, possibly empty
    pub path: &'a str,
    /// Query string without the `?`, `Some("")` for a bare `?`
    pub query: Option<&'a str>,
    /// Fragment without the `#`
    pub fragment: Option<&'a str>,
}

impl<'a> RawUrl<'a> {
    /// Validates `input` and splits it into origin, path, query and fragment
    ///
    /// # Errors
    ///
    /// * `UrlError::Malformed` - The input is not a URL with a `scheme://host` authority
    /// * `UrlError::InvalidScheme` - The scheme is neither http nor https
    ///
    /// # Examples
    ///
    /// ```
    /// use pget::url::RawUrl;
    ///
    /// let raw = RawUrl::parse("http://h/path/pic_1.jpg?size=2#top").unwrap();
    /// assert_eq!(raw.origin, "http://h");
    /// assert_eq!(raw.path, "/path/pic_1.jpg");
    /// assert_eq!(raw.query, Some("size=2"));
    /// assert_eq!(raw.fragment, Some("top"));
    /// ```
    pub fn parse(input: &'a str) -> UrlResult<Self> {
        let parsed = Url::parse(input).map_err(|e| UrlError::Malformed {
            url: input.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                parsed.scheme()
            )));
        }

        let scheme_end = input
            .find("://")
            .filter(|&end| input[..end].eq_ignore_ascii_case(parsed.scheme()))
            .ok_or_else(|| UrlError::Malformed {
                url: input.to_string(),
                reason: "expected scheme://host".to_string(),
            })?;

        // Backslash separates path segments in http(s) URLs too
        let after_scheme = scheme_end + "://".len();
        let authority_len = input[after_scheme..]
            .find(|c: char| matches!(c, '/' | '\\' | '?' | '#'))
            .unwrap_or(input.len() - after_scheme);
        let (origin, rest) = input.split_at(after_scheme + authority_len);

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (rest, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Ok(Self {
            origin,
            path,
            query,
            fragment,
        })
    }

    /// Splits the path into its directory (with trailing slash) and final segment
    pub fn split_file_name(&self) -> (&'a str, &'a str) {
        match self.path.rfind(['/', '\\']) {
            Some(slash) => self.path.split_at(slash + 1),
            None => ("", self.path),
        }
    }

    /// The query with its `?` separator, or an empty string when the URL has none
    pub fn query_tail(&self) -> String {
        self.query.map(|q| format!("?{}", q)).unwrap_or_default()
    }

    /// The fragment with its `#` separator, or an empty string
    pub fn fragment_tail(&self) -> String {
        self.fragment.map(|f| format!("#{}", f)).unwrap_or_default()
    }
}
