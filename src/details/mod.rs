pub(crate) use ping_handler::PingHandler;
pub use ping_error::PingError;
pub use ping_result::PingResult;

pub(crate) mod icmp;
mod ping_error;
mod ping_handler;
mod ping_receiver;
mod ping_result;
mod ping_sender;
mod records;
mod transport;
mod utils;
