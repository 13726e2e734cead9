use crate::details::icmp::v4::{IcmpV4, Inbound, TSocket};
use crate::details::records::PingSendRecord;
use crate::details::transport::Transport;
use crate::details::PingResult;
use crate::PingOutcome;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub(crate) struct PingReceiver {
    icmpv4: Arc<IcmpV4>,
    timeout: Duration,
}

impl PingReceiver {
    pub(crate) fn new(icmpv4: Arc<IcmpV4>, timeout: Duration) -> Self {
        PingReceiver { icmpv4, timeout }
    }

    /// Reads datagrams until one settles `record` or the timeout budget is used up.
    ///
    /// The budget shrinks by the wall-clock time of every iteration, so slow
    /// processing of unrelated traffic may stretch the wait slightly past the
    /// nominal timeout.
    pub(crate) fn receive<S>(&self, transport: &mut Transport<S>, record: &PingSendRecord) -> PingResult<PingOutcome>
    where
        S: TSocket,
    {
        let mut remaining = self.timeout;
        while !remaining.is_zero() {
            let start = Instant::now();
            let Some(received) = transport.receive_within(remaining)? else {
                break;
            };

            let PingSendRecord { ip_addr, sequence_number, header, send_time } = record;
            match self.icmpv4.classify(&received.datagram, *sequence_number, header) {
                Inbound::Verified => {
                    let round_trip = received.receive_time.saturating_duration_since(*send_time);
                    tracing::trace!("echo reply {} from {} after {:?}", sequence_number, ip_addr, round_trip);
                    return Ok(PingOutcome::RoundTrip(round_trip));
                }
                Inbound::Corrupt => {
                    tracing::debug!("echo reply {} from {} has an unexpected payload", sequence_number, ip_addr);
                    return Ok(PingOutcome::Invalid);
                }
                Inbound::Error { icmp_type, code } => {
                    tracing::debug!("ICMP error type={} code={} for echo request {}", icmp_type, code, sequence_number);
                    return Ok(PingOutcome::IcmpError { icmp_type, code });
                }
                Inbound::Unrelated => {
                    tracing::trace!("ignoring unrelated datagram of {} bytes", received.datagram.len());
                }
            }
            remaining = remaining.saturating_sub(start.elapsed());
        }

        tracing::debug!(
            "no reply to echo request {} from {} within {:?}",
            record.sequence_number,
            record.ip_addr,
            self.timeout
        );
        Ok(PingOutcome::Timeout)
    }
}
