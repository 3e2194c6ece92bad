//! Emitter for [RFC 5424](https://tools.ietf.org/html/rfc5424) Syslog messages over UDP. Not to
//! be confused with the older [RFC 3164](https://tools.ietf.org/html/rfc3164) BSD Syslog
//! protocol, which many collectors still accept.
//!
//! Formats a (severity, facility, text) event into the RFC 5424 header layout and fires it at a
//! remote collector as a single datagram. Delivery is best-effort: nothing is acknowledged,
//! nothing is retried, and local transmission failures are reported out-of-band through an
//! error handler instead of a return value.
//!
//! # Example
//!
//! ```no_run
//! use remote_syslog::{SendOptions, Sender, SenderConfig, Severity};
//!
//! let sender = Sender::new(SenderConfig {
//!     target_host: "logs.example.com".to_string(),
//!     target_port: 514,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! sender.send(Severity::NOTICE, "I'm awake!", SendOptions::default());
//! ```
//!
//! # Unimplemented Features
//!
//!  * STRUCTURED-DATA elements. The emitted header ends at MSGID and the free text follows
//!    directly, which is what the collectors this was written against expect.
//!  * The free-text message part is sent verbatim, embedded control characters and all.
//!    Escaping it would change what the collector stores, so that's left to the caller.

mod error;
mod facility;
mod message;
mod procid;
pub mod rfc5424;
mod sender;
mod severity;
pub mod timestamp;
mod transport;

pub use error::Error;
pub use facility::Facility;
pub use message::Message;
pub use procid::ProcId;
pub use sender::{SendOptions, Sender, SenderConfig};
pub use severity::Severity;
