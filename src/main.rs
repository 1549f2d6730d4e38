//! Standalone entry point.
//!
//! Starts the file server and keeps the process alive so the viewer can be
//! exercised from a regular browser. Host applications embed the library
//! instead and call `server::start()` from their integration glue.

use gltf_viewer_server::{server, viewer_index_url};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = server::start()?;

    println!("Viewer page: {}", viewer_index_url(port));
    println!("Local files: http://localhost:{port}/files/<absolute-path>");
    println!("Press Ctrl-C to exit");

    // The accept loop lives on its own thread; this runtime only waits for
    // the interrupt signal.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(tokio::signal::ctrl_c())?;

    Ok(())
}
