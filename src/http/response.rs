//! HTTP response building module
//!
//! Builders for the response shapes the server produces, decoupled from
//! specific namespace logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response for a bundled asset.
///
/// No CORS header: the renderer loading these assets is same-origin
/// relative to the server.
pub fn build_asset_response(
    data: &'static [u8],
    content_type: &'static str,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .body(Full::new(Bytes::from_static(data)))
        .unwrap_or_else(|e| {
            log_build_error("asset", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response for a local file.
///
/// `content_length` is supplied by the caller from file metadata so it stays
/// byte-exact even if a future revision streams instead of buffering. The
/// cross-origin header is required: the renderer's own-origin page fetches
/// this namespace.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &'static str,
    content_length: u64,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("file", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 404 Not Found response: empty body, no Content-Type.
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 405 Method Not Allowed response for non-GET methods.
pub fn build_method_not_allowed_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Allow", "GET")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
