// Connection serving module
// Serves a single accepted TCP stream with HTTP/1.1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger;

/// Serve one connection in a spawned task.
///
/// Each request on the connection is independent and read-only; nothing is
/// shared across requests, so a client aborting mid-read simply ends the
/// task without touching any other connection.
pub fn serve(stream: TcpStream) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service_fn(handler::handle_request));

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
