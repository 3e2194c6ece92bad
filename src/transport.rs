use std::io;
use std::net::{Ipv6Addr, UdpSocket};

/// Connectionless outbound transport: one `UdpSocket` bound to no
/// particular local address, reused for every send. One call to `send`
/// is exactly one datagram on the wire, best-effort and unacknowledged.
pub struct UdpTransport {
    socket: UdpSocket,
    host: String,
    port: u16,
}

impl UdpTransport {
    pub fn new(host: &str, port: u16) -> io::Result<Self> {
        let bind_addr = if host.parse::<Ipv6Addr>().is_ok() {
            "[::]:0"
        } else {
            "0.0.0.0:0"
        };

        let socket = UdpSocket::bind(bind_addr)?;
        socket.set_nonblocking(true)?;

        Ok(UdpTransport {
            socket,
            host: host.to_string(),
            port,
        })
    }

    /// Hand one datagram to the local stack. Success means the stack
    /// accepted it for transmission, not that the peer received it.
    ///
    /// The host is resolved on every call, so a resolution failure shows
    /// up here as an `io::Error` rather than at construction.
    pub fn send(&self, payload: &[u8]) -> io::Result<()> {
        self.socket
            .send_to(payload, (self.host.as_str(), self.port))?;
        Ok(())
    }
}
