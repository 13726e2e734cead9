use crate::details::icmp::v4::{echo_header, IcmpV4, SequenceAllocator, TSocket};
use crate::details::records::PingSendRecord;
use crate::details::transport::Transport;
use crate::details::PingResult;
use std::io;
use std::net::Ipv4Addr;
use std::sync::Arc;

pub(crate) struct PingSender {
    icmpv4: Arc<IcmpV4>,
    sequence_allocator: Arc<SequenceAllocator>,
}

impl PingSender {
    pub(crate) fn new(icmpv4: Arc<IcmpV4>, sequence_allocator: Arc<SequenceAllocator>) -> Self {
        PingSender { icmpv4, sequence_allocator }
    }

    pub(crate) fn send_to<S>(&self, transport: &Transport<S>, ip_addr: Ipv4Addr) -> PingResult<PingSendRecord>
    where
        S: TSocket,
    {
        let sequence_number = self.sequence_allocator.next();
        let package = self
            .icmpv4
            .new_echo_request(sequence_number)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "could not create ICMP package"))?;
        let header = echo_header(&package)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "ICMP package shorter than its header"))?;

        let send_time = transport.send(ip_addr, &package)?;
        tracing::trace!("echo request {} sent to {}", sequence_number, ip_addr);

        Ok(PingSendRecord { ip_addr, sequence_number, header, send_time })
    }
}
