use super::TSocket;
use socket2::{Domain, Protocol, Type};
use std::io::{self, Read};
use std::time::Duration;

// setsockopt(SO_RCVTIMEO) treats a zero timeout as "wait forever".
const MIN_READ_TIMEOUT: Duration = Duration::from_micros(1);

pub(crate) struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    /// Opening a raw ICMP socket needs root or `CAP_NET_RAW`.
    pub(crate) fn new() -> Result<Self, io::Error> {
        tracing::trace!("creating RawSocket");
        let socket = socket2::Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
        Ok(RawSocket { socket })
    }
}

impl TSocket for RawSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize> {
        self.socket.send_to(buf, addr)
    }

    fn recv_within(&self, buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>> {
        self.socket.set_read_timeout(Some(timeout.max(MIN_READ_TIMEOUT)))?;
        // On a RAW socket we get the whole IP datagram.
        match (&self.socket).read(buf) {
            Ok(n) => Ok(Some(n)),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
