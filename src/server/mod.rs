//! Server lifecycle module
//!
//! Process-wide singleton: at most one listener per process, bound to a
//! loopback ephemeral port by the first successful [`start`] and kept until
//! process exit. The accept loop runs on a dedicated thread with its own
//! current-thread runtime, so host applications without a tokio runtime can
//! call [`start`] as a plain synchronous function.

mod connection;
mod listener;

use crate::logger;
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::sync::{Mutex, OnceLock, PoisonError};
use tokio::net::TcpListener;

/// The running server, published once by the first successful `start()`.
static SERVER: OnceLock<ServerHandle> = OnceLock::new();

/// Serializes the bind-and-spawn critical section in `start()`.
static START_LOCK: Mutex<()> = Mutex::new(());

struct ServerHandle {
    addr: SocketAddr,
}

/// Errors from the server lifecycle API.
#[derive(Debug)]
pub enum ServerError {
    /// `port()` was queried before a successful `start()`.
    NotStarted,
    /// The loopback listener could not be bound.
    Bind(io::Error),
    /// The accept-loop thread or its runtime could not be created.
    Spawn(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "server has not been started"),
            Self::Bind(e) => write!(f, "failed to bind loopback listener: {e}"),
            Self::Spawn(e) => write!(f, "failed to spawn server thread: {e}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotStarted => None,
            Self::Bind(e) | Self::Spawn(e) => Some(e),
        }
    }
}

/// Start the server if it is not already running and return the bound port.
///
/// Idempotent: the first successful call binds the listener and spawns the
/// accept loop; every later call returns the same port without re-binding.
/// The port is stable for the process lifetime and the server is never
/// stopped.
pub fn start() -> Result<u16, ServerError> {
    if let Some(server) = SERVER.get() {
        return Ok(server.addr.port());
    }

    let _guard = START_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    // Double-checked: another caller may have won the race before the lock
    if let Some(server) = SERVER.get() {
        return Ok(server.addr.port());
    }

    let std_listener = listener::create_loopback_listener().map_err(ServerError::Bind)?;
    let addr = std_listener.local_addr().map_err(ServerError::Bind)?;

    spawn_accept_thread(std_listener)?;

    logger::log_server_start(&addr);
    let _ = SERVER.set(ServerHandle { addr });
    Ok(addr.port())
}

/// Return the bound port without side effects.
///
/// Unlike [`start`], this never constructs anything: querying before a
/// successful `start()` is an explicit [`ServerError::NotStarted`].
pub fn port() -> Result<u16, ServerError> {
    SERVER
        .get()
        .map(|server| server.addr.port())
        .ok_or(ServerError::NotStarted)
}

/// Spawn the dedicated accept-loop thread with its own runtime.
fn spawn_accept_thread(std_listener: std::net::TcpListener) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Spawn)?;

    std::thread::Builder::new()
        .name("gltf-file-server".into())
        .spawn(move || {
            runtime.block_on(async {
                match TcpListener::from_std(std_listener) {
                    Ok(tokio_listener) => accept_loop(tokio_listener).await,
                    Err(e) => logger::log_error(&format!("Failed to register listener: {e}")),
                }
            });
        })
        .map_err(ServerError::Spawn)?;

    Ok(())
}

/// Accept connections forever, one spawned task per connection.
async fn accept_loop(listener: TcpListener) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => connection::serve(stream),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
