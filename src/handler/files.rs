//! Filesystem namespace handler (`/files` prefix)
//!
//! Serves a single local file per request, addressed by verbatim absolute
//! path. The namespace performs no allow-listing: the listener is
//! loopback-only and the intended client is a trusted renderer running as
//! the same user (see the crate-level docs for the threat model).

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the regular file at `path`, or 404 if it is missing, a directory,
/// or unreadable. Read failures are never reported as a truncated 200.
pub async fn serve_file(path: &str) -> Response<Full<Bytes>> {
    let path = Path::new(path);

    let metadata = match fs::metadata(path).await {
        Ok(m) if m.is_file() => m,
        _ => return http::build_not_found_response(),
    };

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_not_found_response();
        }
    };

    // Content-Length comes from metadata; if the file changed size between
    // stat and read, the buffer length wins so the framing stays exact.
    let mut content_length = metadata.len();
    if content.len() as u64 != content_length {
        logger::log_warning(&format!(
            "File size changed during read: '{}' ({content_length} -> {} bytes)",
            path.display(),
            content.len()
        ));
        content_length = content.len() as u64;
    }

    let extension = path.extension().and_then(|e| e.to_str());
    http::build_file_response(content, mime::content_type_for(extension), content_length)
}
