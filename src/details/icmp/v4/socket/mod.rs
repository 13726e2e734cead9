use std::{io, time::Duration};

pub(crate) mod raw_socket;

pub(crate) trait TSocket: Send + Sync {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize>;

    /// Waits at most `timeout` for one datagram; `Ok(None)` if none arrived.
    fn recv_within(&self, buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>>;
}
