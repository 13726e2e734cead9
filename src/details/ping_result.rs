use crate::details::PingError;

pub type PingResult<T> = std::result::Result<T, PingError>;
