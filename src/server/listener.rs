// Loopback listener module
// Creates the TCP listener the server accepts on

use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Create a non-blocking `TcpListener` bound to `127.0.0.1:0`.
///
/// Port 0 asks the OS for an ephemeral port; the caller reads the chosen
/// port back from `local_addr`. The socket is created non-blocking so it can
/// be registered with the tokio runtime.
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully created and bound listener
/// * `Err(std::io::Error)` - Failed to create or bind socket
pub fn create_loopback_listener() -> std::io::Result<std::net::TcpListener> {
    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0));

    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;

    // Start listening with a backlog queue size of 128
    socket.listen(128)?;

    Ok(socket.into())
}
