use crate::details::icmp::v4::{TSocket, ECHO_HEADER_LEN, IPV4_HEADER_LEN};
use crate::details::records::PingReceiveRecord;
use crate::details::{PingError, PingResult};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

/// Lower bound of the read buffer, enough for any ICMP error datagram.
const MIN_RECV_BUFFER_SIZE: usize = 4096;

/// Owns the socket of a session; dropping it releases the socket.
pub(crate) struct Transport<S> {
    socket: Option<S>,
    buffer: Vec<u8>,
}

impl<S> Transport<S>
where
    S: TSocket,
{
    /// The read buffer holds the echo reply to a request carrying `payload_size` bytes.
    pub(crate) fn new(socket: S, payload_size: usize) -> Self {
        let buffer_size = MIN_RECV_BUFFER_SIZE.max(IPV4_HEADER_LEN + ECHO_HEADER_LEN + payload_size);
        Transport { socket: Some(socket), buffer: vec![0u8; buffer_size] }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.socket.is_none()
    }

    pub(crate) fn send(&self, ip_addr: Ipv4Addr, package: &[u8]) -> PingResult<Instant> {
        let socket = self.socket.as_ref().ok_or(PingError::Closed)?;
        let addr: socket2::SockAddr = SocketAddr::new(IpAddr::V4(ip_addr), 0).into();
        socket.send_to(package, &addr)?;
        Ok(Instant::now())
    }

    pub(crate) fn receive_within(&mut self, remaining: Duration) -> PingResult<Option<PingReceiveRecord>> {
        let socket = self.socket.as_ref().ok_or(PingError::Closed)?;
        match socket.recv_within(&mut self.buffer, remaining)? {
            None => Ok(None),
            Some(n) => {
                let receive_time = Instant::now();
                Ok(Some(PingReceiveRecord { datagram: self.buffer[..n].to_vec(), receive_time }))
            }
        }
    }

    pub(crate) fn close(&mut self) {
        if self.socket.take().is_some() {
            tracing::trace!("socket released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::icmp::v4::tests::{OnReceive, OnSend, SocketMock};

    #[test]
    fn send_goes_to_address() {
        let socket = SocketMock::new(OnSend::ReturnDefault, vec![]);
        let transport = Transport::new(socket.clone(), 56);
        let localhost = Ipv4Addr::new(127, 0, 0, 1);

        let send_time = transport.send(localhost, &[8, 0, 0, 0]);

        assert!(send_time.is_ok());
        socket.should_send_number_of_messages(1).should_send_to_address(&IpAddr::V4(localhost));
    }

    #[test]
    fn when_socket_fails_then_send_fails() {
        let socket = SocketMock::new(OnSend::ReturnErr, vec![]);
        let transport = Transport::new(socket.clone(), 56);

        let result = transport.send(Ipv4Addr::new(127, 0, 0, 1), &[8, 0, 0, 0]);

        assert!(matches!(result, Err(PingError::Io(_))));
        socket.should_send_number_of_messages(0);
    }

    #[test]
    fn receive_within_returns_datagram() {
        let socket = SocketMock::new(OnSend::ReturnDefault, vec![OnReceive::Datagram(vec![1, 2, 3])]);
        let mut transport = Transport::new(socket.clone(), 56);

        let record = transport.receive_within(Duration::from_millis(10)).unwrap().unwrap();

        assert_eq!(vec![1, 2, 3], record.datagram);
        socket.should_receive_number_of_messages(1);
    }

    #[test]
    fn receive_within_returns_none_when_nothing_arrives() {
        let socket = SocketMock::new(OnSend::ReturnDefault, vec![OnReceive::ReturnNothing]);
        let mut transport = Transport::new(socket, 56);

        assert!(transport.receive_within(Duration::from_millis(10)).unwrap().is_none());
    }

    #[test]
    fn when_socket_fails_then_receive_fails() {
        let socket = SocketMock::new(OnSend::ReturnDefault, vec![OnReceive::ReturnErr]);
        let mut transport = Transport::new(socket, 56);

        assert!(matches!(transport.receive_within(Duration::from_millis(10)), Err(PingError::Io(_))));
    }

    #[test]
    fn buffer_holds_reply_to_large_payload() {
        let socket = SocketMock::new(OnSend::ReturnDefault, vec![OnReceive::Datagram(vec![0xAB; 9000])]);
        let mut transport = Transport::new(socket, 9000 - IPV4_HEADER_LEN - ECHO_HEADER_LEN);

        let record = transport.receive_within(Duration::from_millis(10)).unwrap().unwrap();

        assert_eq!(9000, record.datagram.len());
    }

    #[test]
    fn buffer_is_never_smaller_than_minimum() {
        let transport = Transport::new(SocketMock::new(OnSend::ReturnDefault, vec![]), 0);
        assert_eq!(MIN_RECV_BUFFER_SIZE, transport.buffer.len());
    }

    #[test]
    fn close_is_idempotent() {
        let mut transport = Transport::new(SocketMock::new(OnSend::ReturnDefault, vec![]), 56);
        transport.close();
        transport.close();

        assert!(transport.is_closed());
        assert!(matches!(transport.send(Ipv4Addr::new(127, 0, 0, 1), &[]), Err(PingError::Closed)));
        assert!(matches!(transport.receive_within(Duration::from_millis(10)), Err(PingError::Closed)));
    }
}
