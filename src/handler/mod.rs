//! Request handler module
//!
//! Routing dispatch and the two resource-namespace handlers.

pub mod files;
pub mod router;
pub mod viewer;

// Re-export main entry point
pub use router::handle_request;
