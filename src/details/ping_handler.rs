use crate::details::icmp::v4::{IcmpV4, SequenceAllocator, SequenceNumber, TSocket};
use crate::details::ping_receiver::PingReceiver;
use crate::details::ping_sender::PingSender;
use crate::details::records::PingSendRecord;
use crate::details::transport::Transport;
use crate::details::utils::lookup_host_v4;
use crate::details::{PingError, PingResult};
use crate::{PingOutcome, PingSessionConfig};
use std::net::Ipv4Addr;
use std::sync::Arc;

pub(crate) struct PingHandler<S> {
    destination: String,
    destination_ip: Option<Ipv4Addr>,
    ping_sender: PingSender,
    ping_receiver: PingReceiver,
    last_sent: Option<PingSendRecord>,
    transport: Transport<S>,
}

impl<S> PingHandler<S>
where
    S: TSocket,
{
    pub(crate) fn new(config: &PingSessionConfig<'_>, sequence_allocator: Arc<SequenceAllocator>, socket: S) -> Self {
        let icmpv4 = Arc::new(IcmpV4::new(config.identifier, config.payload_size));
        PingHandler {
            destination: config.destination.to_owned(),
            destination_ip: None,
            ping_sender: PingSender::new(icmpv4.clone(), sequence_allocator),
            ping_receiver: PingReceiver::new(icmpv4, config.timeout),
            last_sent: None,
            transport: Transport::new(socket, config.payload_size),
        }
    }

    pub(crate) fn destination(&self) -> &str {
        &self.destination
    }

    pub(crate) fn destination_ip(&self) -> Option<Ipv4Addr> {
        self.destination_ip
    }

    pub(crate) fn last_sequence_number(&self) -> Option<SequenceNumber> {
        self.last_sent.map(|record| record.sequence_number)
    }

    pub(crate) fn ping(&mut self, requery_dns: bool) -> PingResult<PingOutcome> {
        if self.transport.is_closed() {
            return Err(PingError::Closed);
        }
        let ip_addr = self.resolve(requery_dns)?;
        let record = self.ping_sender.send_to(&self.transport, ip_addr)?;
        self.last_sent = Some(record);
        self.ping_receiver.receive(&mut self.transport, &record)
    }

    pub(crate) fn close(&mut self) {
        self.transport.close();
    }

    fn resolve(&mut self, requery_dns: bool) -> PingResult<Ipv4Addr> {
        match self.destination_ip {
            Some(ip_addr) if !requery_dns => Ok(ip_addr),
            _ => {
                let ip_addr = lookup_host_v4(&self.destination)?;
                tracing::debug!("resolved {} to {}", self.destination, ip_addr);
                self.destination_ip = Some(ip_addr);
                Ok(ip_addr)
            }
        }
    }
}
