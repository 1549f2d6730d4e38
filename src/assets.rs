//! Bundled viewer assets
//!
//! The viewer page is embedded into the binary at compile time and exposed
//! as a flat, read-only namespace keyed by exact relative path. There is no
//! enumeration and no traversal; a key either matches one of the embedded
//! entries or misses.

const INDEX_HTML: &[u8] = include_bytes!("../assets/index.html");
const VIEWER_JS: &[u8] = include_bytes!("../assets/viewer.js");
const VIEWER_CSS: &[u8] = include_bytes!("../assets/viewer.css");

/// Look up a bundled asset by its relative key (e.g. `index.html`).
pub fn lookup(key: &str) -> Option<&'static [u8]> {
    match key {
        "index.html" => Some(INDEX_HTML),
        "viewer.js" => Some(VIEWER_JS),
        "viewer.css" => Some(VIEWER_CSS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_assets() {
        assert!(lookup("index.html").is_some());
        assert!(lookup("viewer.js").is_some());
        assert!(lookup("viewer.css").is_some());
    }

    #[test]
    fn test_unknown_keys_miss() {
        assert!(lookup("missing.js").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("index.htm").is_none());
        assert!(lookup("../Cargo.toml").is_none());
    }

    #[test]
    fn test_index_page_references_companion_assets() {
        let index = lookup("index.html").unwrap();
        let html = std::str::from_utf8(index).unwrap();
        assert!(html.contains("viewer.js"));
        assert!(html.contains("viewer.css"));
    }
}
