//! In-memory representation of a single Syslog message, with every header
//! field already resolved. Defaulting (current time, configured hostname,
//! NILVALUE fallbacks) happens in the `Sender` before one of these is
//! built, which keeps the encoder a pure function of this struct.

use chrono::{DateTime, Utc};

use crate::facility;
use crate::procid::ProcId;
use crate::severity;

/// A RFC5424-protocol syslog message
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message<S: AsRef<str> + Clone> {
    pub severity: severity::Severity,
    pub facility: facility::Facility,
    pub timestamp: DateTime<Utc>,
    /// `None` renders as the NILVALUE `-`.
    pub hostname: Option<S>,
    /// `None` renders as the NILVALUE `-`.
    pub appname: Option<S>,
    pub procid: ProcId<S>,
    /// `None` renders as the NILVALUE `-`.
    pub msgid: Option<S>,
    // NOTE: the message text is emitted verbatim, no escaping
    pub msg: S,
}
