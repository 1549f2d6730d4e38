//! Loopback HTTP server for an embedded glTF renderer.
//!
//! Bridges a sandboxed browser-like surface, which can only load content
//! over HTTP(S) URLs, with two read-only resource spaces:
//!
//! - `/viewer/<key>` — viewer page assets bundled into the binary
//! - `/files/<absolute-path>` — arbitrary files on the local filesystem
//!
//! The server is a process-wide singleton bound to `127.0.0.1` on an
//! OS-assigned ephemeral port. [`server::start`] is idempotent; the port is
//! stable for the life of the process and the server is never stopped.
//!
//! # Threat model
//!
//! The `/files` namespace performs no path allow-listing: any absolute path
//! readable by this process is served to any client that can reach the
//! loopback port. This is deliberate — the listener binds to loopback only
//! and the intended client is a trusted renderer running as the same user on
//! the same machine. Do not expose this server beyond loopback.

pub mod assets;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use server::{port, start, ServerError};

/// URL of the bundled viewer page on a running server.
#[must_use]
pub fn viewer_index_url(port: u16) -> String {
    format!("http://localhost:{port}/viewer/index.html")
}

/// URL that serves the local file at `path` (an absolute path).
///
/// This is the URL the host passes to the renderer's `loadGltf` entry point
/// when the user selects a model file.
#[must_use]
pub fn file_url(port: u16, path: &str) -> String {
    format!("http://localhost:{port}/files{path}")
}
