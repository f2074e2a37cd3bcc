//! Storage module for persisting retrieved resources
//!
//! Each retrieved resource is written under the final path segment of its
//! URL. Later writes of the same name replace earlier ones.

mod directory;
mod traits;

pub use directory::DirectoryStore;
pub use traits::{ResourceStore, StorageError, StorageResult};

use url::Url;

/// File name used when a URL has no final path segment
pub const DEFAULT_FILE_NAME: &str = "index.html";

/// Derives the file name for a resource from its URL's final path segment
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pget::storage::file_name_for;
///
/// let url = Url::parse("http://h/pics/pic_07.jpg?size=large").unwrap();
/// assert_eq!(file_name_for(&url), "pic_07.jpg");
///
/// let url = Url::parse("http://h/pics/").unwrap();
/// assert_eq!(file_name_for(&url), "index.html");
/// ```
pub fn file_name_for(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_last_segment() {
        let url = Url::parse("http://h/a/b/c.rar").unwrap();
        assert_eq!(file_name_for(&url), "c.rar");
    }

    #[test]
    fn test_file_name_ignores_query() {
        let url = Url::parse("http://h/view.php?page=3").unwrap();
        assert_eq!(file_name_for(&url), "view.php");
    }

    #[test]
    fn test_file_name_fallback() {
        let url = Url::parse("http://h").unwrap();
        assert_eq!(file_name_for(&url), DEFAULT_FILE_NAME);

        let url = Url::parse("http://h/chapter/12/").unwrap();
        assert_eq!(file_name_for(&url), DEFAULT_FILE_NAME);
    }
}
