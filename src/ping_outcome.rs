use std::fmt;
use std::time::Duration;

/// How one `ping()` ended, short of a fatal [`PingError`](crate::PingError).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PingOutcome {
    /// The reply arrived intact after this long.
    RoundTrip(Duration),
    /// No reply or error about the request arrived in time.
    Timeout,
    /// A reply carried the right identifier and sequence number but a different payload.
    Invalid,
    /// An ICMP error message (destination unreachable, time exceeded, ...) quoted the request.
    IcmpError { icmp_type: u8, code: u8 },
}

impl fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingOutcome::RoundTrip(round_trip) => write!(f, "time={round_trip:?}"),
            PingOutcome::Timeout => write!(f, "no PING response received"),
            PingOutcome::Invalid => write!(f, "payload did not match expected value"),
            PingOutcome::IcmpError { icmp_type, code } => write!(f, "ICMP type={icmp_type}, code={code}"),
        }
    }
}
