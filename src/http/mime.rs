//! MIME type resolution module
//!
//! Returns the Content-Type for a file extension. This table is the single
//! source of truth for both resource namespaces; no content sniffing is
//! performed.

/// Get the MIME Content-Type for a file extension (without the leading dot).
///
/// Matching is case-insensitive; unknown, empty, or missing extensions fall
/// back to `application/octet-stream`.
///
/// # Examples
/// ```
/// use gltf_viewer_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("glb")), "model/gltf-binary");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    let lowered = extension.map(str::to_ascii_lowercase);
    match lowered.as_deref() {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("gltf") => "model/gltf+json",
        Some("glb") => "model/gltf-binary",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert_eq!(content_type_for(Some("html")), "text/html");
        assert_eq!(content_type_for(Some("js")), "application/javascript");
        assert_eq!(content_type_for(Some("css")), "text/css");
        assert_eq!(content_type_for(Some("gltf")), "model/gltf+json");
        assert_eq!(content_type_for(Some("glb")), "model/gltf-binary");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(content_type_for(Some("GLB")), "model/gltf-binary");
        assert_eq!(content_type_for(Some("GlTF")), "model/gltf+json");
        assert_eq!(content_type_for(Some("Html")), "text/html");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Some("exe")), "application/octet-stream");
        assert_eq!(content_type_for(Some("")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }
}
