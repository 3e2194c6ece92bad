use std::fmt::Display;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Severity outside the RFC 5424 range 0..=7.
    InvalidSeverity(i32),
    /// Facility outside the RFC 5424 range 0..=23.
    InvalidFacility(i32),
    /// The local stack refused the datagram (unreachable, resolution
    /// failure, socket not writable). The peer is never consulted, so
    /// absence of this error does not imply delivery.
    Transmission(io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transmission(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSeverity(value) => write!(f, "severity out of range: {value}"),
            Error::InvalidFacility(value) => write!(f, "facility out of range: {value}"),
            Error::Transmission(err) => write!(f, "transmission failed: {err}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Transmission(value)
    }
}
