/// Extensions whose payloads are delivered untouched.
pub const BINARY_EXTENSIONS: &[&str] = &[".jpeg", ".jpg", ".png", ".webp", ".eph"];

/// How a fetched payload is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Image or ephemeris data, never modified.
    Binary,
    /// Anything else; guaranteed a NUL terminator past the payload.
    Text,
}

/// Decide from the URL alone whether a resource is binary or text.
///
/// The query string and fragment are ignored and the extension is matched
/// case-insensitively.
///
/// # Examples
///
/// ```
/// use orrery_request::{classify, ContentKind};
///
/// assert_eq!(classify("https://x.test/img.JPG?v=2"), ContentKind::Binary);
/// assert_eq!(classify("https://x.test/def.txt#frag"), ContentKind::Text);
/// ```
pub fn classify(url: &str) -> ContentKind {
    let path = strip_query_and_fragment(url).as_bytes();
    let binary = BINARY_EXTENSIONS.iter().any(|ext| {
        let ext = ext.as_bytes();
        path.len() >= ext.len() && path[path.len() - ext.len()..].eq_ignore_ascii_case(ext)
    });

    if binary { ContentKind::Binary } else { ContentKind::Text }
}

fn strip_query_and_fragment(url: &str) -> &str {
    match url.find(|c: char| c == '?' || c == '#') {
        Some(end) => &url[..end],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_are_binary() {
        for url in [
            "https://xyz.test/a.jpg",
            "https://xyz.test/a.jpeg",
            "https://xyz.test/a.png",
            "https://xyz.test/a.webp",
        ] {
            assert_eq!(classify(url), ContentKind::Binary, "{url}");
        }
    }

    #[test]
    fn ephemeris_is_binary() {
        assert_eq!(classify("https://data.test/moon.eph"), ContentKind::Binary);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("https://x.test/img.JPG?v=2"), ContentKind::Binary);
        assert_eq!(classify("https://x.test/IMG.WebP"), ContentKind::Binary);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(classify("http://xyz.test.jpg?xyz"), ContentKind::Binary);
        assert_eq!(classify("http://xyz.test.jpg#xyz"), ContentKind::Binary);
        assert_eq!(classify("https://x.test/def.txt#frag"), ContentKind::Text);
        assert_eq!(classify("https://x.test/def.txt?f=a.png"), ContentKind::Text);
    }

    #[test]
    fn extension_must_end_the_path() {
        assert_eq!(classify("https://x.test/a.jpg.json"), ContentKind::Text);
        assert_eq!(classify("https://x.test/jpg"), ContentKind::Text);
    }

    #[test]
    fn other_resources_are_text() {
        assert_eq!(classify("https://x.test/properties"), ContentKind::Text);
        assert_eq!(classify("https://x.test/tle.txt"), ContentKind::Text);
        assert_eq!(classify(""), ContentKind::Text);
    }

    #[test]
    fn non_ascii_paths_do_not_panic() {
        assert_eq!(classify("https://x.test/étoile.png"), ContentKind::Binary);
        assert_eq!(classify("https://x.test/星"), ContentKind::Text);
    }
}
