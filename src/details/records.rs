use crate::details::icmp::v4::{EchoHeader, SequenceNumber};
use std::net::Ipv4Addr;
use std::time::Instant;

/// The request in flight, kept to recognize its reply or an error about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PingSendRecord {
    pub ip_addr: Ipv4Addr,
    pub sequence_number: SequenceNumber,
    pub header: EchoHeader,
    pub send_time: Instant,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PingReceiveRecord {
    pub datagram: Vec<u8>,
    pub receive_time: Instant,
}
