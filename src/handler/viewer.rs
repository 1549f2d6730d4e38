//! Bundled-asset namespace handler (`/viewer` prefix)
//!
//! Serves the viewer page resources embedded in the binary. The namespace
//! is trusted, read-only, and addressed by exact relative key; traversal
//! sequences are passed through unchanged and simply miss the flat lookup.

use crate::assets;
use crate::http::{self, mime};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;

/// Serve a bundled asset by its relative key, or 404 if no entry exists.
pub fn serve_asset(key: &str) -> Response<Full<Bytes>> {
    match assets::lookup(key) {
        Some(data) => {
            let extension = Path::new(key).extension().and_then(|e| e.to_str());
            http::build_asset_response(data, mime::content_type_for(extension))
        }
        None => http::build_not_found_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_content_types() {
        assert_eq!(
            serve_asset("index.html").headers()["Content-Type"],
            "text/html"
        );
        assert_eq!(
            serve_asset("viewer.js").headers()["Content-Type"],
            "application/javascript"
        );
        assert_eq!(serve_asset("viewer.css").headers()["Content-Type"], "text/css");
    }

    #[test]
    fn test_content_length_matches_asset_size() {
        let size = assets::lookup("viewer.js").unwrap().len();
        let response = serve_asset("viewer.js");
        assert_eq!(
            response.headers()["Content-Length"],
            size.to_string().as_str()
        );
    }

    #[test]
    fn test_traversal_keys_miss() {
        assert_eq!(serve_asset("../assets/index.html").status(), 404);
        assert_eq!(serve_asset("..%2Findex.html").status(), 404);
    }
}
