use crate::{Error, Facility};

/// Syslog Severities from RFC 5424.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

/// Convert an int into a `Severity`, validating the RFC 5424 range.
///
/// This is the only way an out-of-range severity can reach the library,
/// and it fails here, before any message is built or sent.
impl TryFrom<i32> for Severity {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let severity = match value {
            0 => Severity::EMERG,
            1 => Severity::ALERT,
            2 => Severity::CRIT,
            3 => Severity::ERR,
            4 => Severity::WARNING,
            5 => Severity::NOTICE,
            6 => Severity::INFO,
            7 => Severity::DEBUG,
            _ => return Err(Error::InvalidSeverity(value)),
        };

        Ok(severity)
    }
}

impl Severity {
    /// Combine with a facility into the PRI value transmitted as the
    /// message's bracketed prefix: `facility * 8 + severity`, 0..=191.
    pub const fn priority(self, facility: Facility) -> u8 {
        (facility as u8) << 3 | self as u8
    }

    /// Convert a syslog severity into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::EMERG => "emerg",
            Severity::ALERT => "alert",
            Severity::CRIT => "crit",
            Severity::ERR => "err",
            Severity::WARNING => "warning",
            Severity::NOTICE => "notice",
            Severity::INFO => "info",
            Severity::DEBUG => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Severity;
    use crate::{Error, Facility};

    #[test]
    fn deref() {
        assert_eq!(Severity::EMERG.as_str(), "emerg");
        assert_eq!(Severity::ALERT.as_str(), "alert");
        assert_eq!(Severity::CRIT.as_str(), "crit");
        assert_eq!(Severity::ERR.as_str(), "err");
        assert_eq!(Severity::WARNING.as_str(), "warning");
        assert_eq!(Severity::NOTICE.as_str(), "notice");
        assert_eq!(Severity::INFO.as_str(), "info");
        assert_eq!(Severity::DEBUG.as_str(), "debug");
    }

    #[test]
    fn priority_full_grid() {
        for f in 0..24 {
            for s in 0..8 {
                let facility = Facility::try_from(f).unwrap();
                let severity = Severity::try_from(s).unwrap();
                assert_eq!(severity.priority(facility) as i32, f * 8 + s);
            }
        }
    }

    #[test]
    fn out_of_range() {
        for value in [-1, 8, 100] {
            match Severity::try_from(value) {
                Err(Error::InvalidSeverity(got)) => assert_eq!(got, value),
                other => panic!("expected InvalidSeverity, got {other:?}"),
            }
        }
    }
}
