#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use details::icmp::v4::{checksum, Identifier, SequenceAllocator, SequenceNumber};
pub use details::{PingError, PingResult};
pub use ping_outcome::PingOutcome;
pub use ping_session::{PingSession, PingSessionConfig};

mod details;
mod ping_outcome;
mod ping_session;
