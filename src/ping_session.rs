use crate::details::icmp::v4::{Identifier, RawSocket, SequenceAllocator, SequenceNumber};
use crate::details::PingHandler;
use crate::{PingOutcome, PingResult};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_PAYLOAD_SIZE: usize = 56;

#[allow(clippy::module_name_repetitions)]
pub struct PingSessionConfig<'a> {
    pub destination: &'a str,
    pub timeout: Duration,
    pub payload_size: usize,
    pub identifier: Identifier,
}

impl<'a> PingSessionConfig<'a> {
    /// Five second timeout, 56 payload bytes, identifier from the process id.
    #[must_use]
    pub fn new(destination: &'a str) -> Self {
        PingSessionConfig {
            destination,
            timeout: DEFAULT_TIMEOUT,
            payload_size: DEFAULT_PAYLOAD_SIZE,
            identifier: Identifier::from_process(),
        }
    }
}

/// Sends ICMP echo requests to one destination over a raw IPv4 socket.
///
/// A session issues one request at a time. Use one session per thread to
/// ping in parallel; the sequence numbers of all sessions built with
/// [`PingSession::new`] come from [`SequenceAllocator::global`].
///
/// The socket is released by [`PingSession::close`] or when the session is dropped.
pub struct PingSession(PingHandler<RawSocket>);

impl PingSession {
    /// Opens the raw socket, which needs root or `CAP_NET_RAW`.
    pub fn new(config: &PingSessionConfig<'_>) -> PingResult<Self> {
        Self::with_sequence_allocator(config, SequenceAllocator::global())
    }

    pub fn with_sequence_allocator(
        config: &PingSessionConfig<'_>,
        sequence_allocator: Arc<SequenceAllocator>,
    ) -> PingResult<Self> {
        let socket = RawSocket::new()?;
        Ok(PingSession(PingHandler::new(config, sequence_allocator, socket)))
    }

    /// Sends one echo request and waits for its outcome.
    ///
    /// The destination is resolved on the first call and whenever
    /// `requery_dns` is set; otherwise the cached address is reused.
    ///
    /// # Errors
    ///
    /// Fails if the destination cannot be resolved to an IPv4 address, if the
    /// socket fails, or if the session was closed. Timeouts, corrupt replies
    /// and ICMP errors are [`PingOutcome`]s, not errors.
    pub fn ping(&mut self, requery_dns: bool) -> PingResult<PingOutcome> {
        self.0.ping(requery_dns)
    }

    pub fn close(&mut self) {
        self.0.close();
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        self.0.destination()
    }

    #[must_use]
    pub fn destination_ip(&self) -> Option<Ipv4Addr> {
        self.0.destination_ip()
    }

    #[must_use]
    pub fn last_sequence_number(&self) -> Option<SequenceNumber> {
        self.0.last_sequence_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PingSessionConfig::new("example.com");

        assert_eq!("example.com", config.destination);
        assert_eq!(Duration::from_secs(5), config.timeout);
        assert_eq!(56, config.payload_size);
        assert_eq!(Identifier::from_process(), config.identifier);
    }
}
