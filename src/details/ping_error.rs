use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum PingError {
    /// Opening, writing to or reading from the socket failed.
    Io(io::Error),
    /// The resolver returned no IPv4 address for the destination.
    Resolution { hostname: String, source: Option<io::Error> },
    /// The session's socket has already been released.
    Closed,
}

impl fmt::Display for PingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "PingError")?;
        match self {
            PingError::Io(error) => write!(f, ": {error}"),
            PingError::Resolution { hostname, .. } => write!(f, ": could not resolve hostname {hostname} to IPv4"),
            PingError::Closed => write!(f, ": session is closed"),
        }
    }
}

impl Error for PingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PingError::Io(error) | PingError::Resolution { source: Some(error), .. } => Some(error),
            PingError::Resolution { source: None, .. } | PingError::Closed => None,
        }
    }
}

impl From<io::Error> for PingError {
    fn from(error: io::Error) -> PingError {
        PingError::Io(error)
    }
}
