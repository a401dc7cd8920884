//! URL helpers for building nps.gov links.

use url::Url;

/// Whether `s` is an absolute http(s) URL.
pub fn is_absolute_http(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

/// Join a site-relative path onto the base URL.
///
/// Absolute hrefs are returned unchanged. Exactly one `/` separates base
/// and path.
pub fn join_path(base_url: &str, path: &str) -> String {
    if is_absolute_http(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a park page URL: base + park path + index file.
pub fn detail_url(base_url: &str, path: &str, index_file: &str) -> String {
    let mut url = join_path(base_url, path);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(index_file.trim_start_matches('/'));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(
            join_path("https://www.nps.gov", "/state/mi/index.htm"),
            "https://www.nps.gov/state/mi/index.htm"
        );
        assert_eq!(
            join_path("https://www.nps.gov/", "state/mi/index.htm"),
            "https://www.nps.gov/state/mi/index.htm"
        );
        assert_eq!(
            join_path("https://www.nps.gov", "https://home.nps.gov/isro/"),
            "https://home.nps.gov/isro/"
        );
    }

    #[test]
    fn test_detail_url() {
        assert_eq!(
            detail_url("https://www.nps.gov", "/isro/", "index.htm"),
            "https://www.nps.gov/isro/index.htm"
        );
        assert_eq!(
            detail_url("https://www.nps.gov", "/piro", "index.htm"),
            "https://www.nps.gov/piro/index.htm"
        );
    }

    #[test]
    fn test_is_absolute_http() {
        assert!(is_absolute_http("https://www.nps.gov/index.htm"));
        assert!(!is_absolute_http("/state/mi/index.htm"));
        assert!(!is_absolute_http("49931"));
        assert!(!is_absolute_http("mailto:park@nps.gov"));
    }
}
