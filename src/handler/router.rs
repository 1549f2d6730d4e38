//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation and prefix
//! dispatch to the two resource namespaces.

use crate::handler::{files, viewer};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;

/// Main entry point for HTTP request handling.
///
/// Only `GET` is part of the contract; every other method receives a
/// generic 405. Requests are fully independent and read-only, so no state
/// survives across them.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    logger::log_request(method, path);

    if *method != Method::GET {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::build_method_not_allowed_response());
    }

    let response = route(path).await;
    logger::log_response(response.status().as_u16());
    Ok(response)
}

/// Dispatch a GET request path to its namespace handler.
///
/// `/viewer/<key>` serves bundled assets and `/files/<absolute-path>`
/// serves local files; any other path is 404.
pub async fn route(path: &str) -> Response<Full<Bytes>> {
    if let Some(key) = path.strip_prefix("/viewer/") {
        return viewer::serve_asset(key);
    }
    if let Some(file_path) = path.strip_prefix("/files") {
        return files::serve_file(file_path).await;
    }
    http::build_not_found_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_viewer_asset_served_without_cors() {
        let response = route("/viewer/index.html").await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "text/html");
        assert!(response
            .headers()
            .get("Access-Control-Allow-Origin")
            .is_none());
        let body = body_bytes(response).await;
        assert_eq!(&body[..], crate::assets::lookup("index.html").unwrap());
    }

    #[tokio::test]
    async fn test_unknown_viewer_key_is_404() {
        let response = route("/viewer/missing.js").await;
        assert_eq!(response.status(), 404);
        assert!(response.headers().get("Content-Type").is_none());
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_unregistered_paths_are_404() {
        assert_eq!(route("/").await.status(), 404);
        assert_eq!(route("/unregistered/path").await.status(), 404);
        // Bare prefixes carry no resource key
        assert_eq!(route("/viewer").await.status(), 404);
    }
}
