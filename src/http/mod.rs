//! HTTP protocol layer module
//!
//! Content-type resolution and response framing, decoupled from the
//! namespace handlers.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_asset_response, build_file_response, build_method_not_allowed_response,
    build_not_found_response,
};
