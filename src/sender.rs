use std::io;

use chrono::{DateTime, Utc};
use log::warn;

use crate::procid::ProcId;
use crate::rfc5424::encode_message;
use crate::transport::UdpTransport;
use crate::{Error, Facility, Message, Severity};

type ErrorHandler = Box<dyn Fn(&Error) + Send + Sync>;

/// Where and how to emit. Built once; its fields are the per-endpoint
/// middle tier of the override -> endpoint default -> NILVALUE
/// resolution applied on every send.
pub struct SenderConfig {
    pub target_host: String,
    pub target_port: u16,
    /// Default HOSTNAME field. `None` falls back to the OS hostname.
    pub hostname: Option<String>,
    /// Default APP-NAME field. `None` renders the NILVALUE `-`.
    pub appname: Option<String>,
    pub facility: Facility,
}

impl Default for SenderConfig {
    fn default() -> Self {
        SenderConfig {
            target_host: "127.0.0.1".to_string(),
            target_port: 514,
            hostname: None,
            appname: None,
            facility: Facility::default(),
        }
    }
}

/// Per-call overrides. Every field is optional and falls back to the
/// endpoint defaults, so `SendOptions::default()` means "just the
/// configured behavior".
#[derive(Default)]
pub struct SendOptions<'a> {
    /// Defaults to the current instant at format time.
    pub timestamp: Option<DateTime<Utc>>,
    pub hostname: Option<&'a str>,
    pub appname: Option<&'a str>,
    pub msgid: Option<&'a str>,
    pub facility: Option<Facility>,
}

/// Emits RFC 5424 messages at a remote collector over UDP.
///
/// `send` never blocks and never returns an error: the datagram is
/// handed to the local stack and forgotten. Local transmission failures
/// are delivered to the handler registered with
/// [`set_error_handler`](Sender::set_error_handler), or logged through
/// `log::warn!` when no handler is registered. Delivery itself is
/// best-effort, absence of an error does not mean the collector got the
/// message.
pub struct Sender {
    transport: UdpTransport,
    hostname: Option<String>,
    appname: Option<String>,
    facility: Facility,
    procid: ProcId<String>,
    on_error: Option<ErrorHandler>,
}

impl Sender {
    /// Bind the socket and resolve the endpoint defaults. The OS
    /// hostname and process id are captured here, once, so `send` makes
    /// no system lookups on the hot path.
    pub fn new(config: SenderConfig) -> io::Result<Self> {
        let transport = UdpTransport::new(&config.target_host, config.target_port)?;
        let hostname = config.hostname.or_else(system_hostname);

        Ok(Sender {
            transport,
            hostname,
            appname: config.appname,
            facility: config.facility,
            procid: ProcId::current(),
            on_error: None,
        })
    }

    /// Register an observer for transmission failures. At most one
    /// handler is active; registering again replaces it.
    pub fn set_error_handler<F>(&mut self, handler: F)
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(handler));
    }

    /// The resolved default HOSTNAME field.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Format and emit one message as exactly one datagram.
    pub fn send(&self, severity: Severity, msg: &str, options: SendOptions<'_>) {
        let procid = match &self.procid {
            ProcId::PID(pid) => ProcId::PID(*pid),
            ProcId::Name(name) => ProcId::Name(name.as_str()),
        };

        let message = Message {
            severity,
            facility: options.facility.unwrap_or(self.facility),
            timestamp: options.timestamp.unwrap_or_else(Utc::now),
            hostname: options.hostname.or(self.hostname.as_deref()),
            appname: options.appname.or(self.appname.as_deref()),
            procid,
            msgid: options.msgid,
            msg,
        };

        let encoded = encode_message(&message);
        if let Err(err) = self.transport.send(encoded.as_bytes()) {
            self.report(Error::Transmission(err));
        }
    }

    // Transmission is fire-and-forget and so is failure reporting: one
    // notification per failure, then the error is discarded. An
    // unobserved failure must never take the process down.
    fn report(&self, err: Error) {
        match &self.on_error {
            Some(handler) => handler(&err),
            None => warn!("{err}"),
        }
    }
}

fn system_hostname() -> Option<String> {
    hostname::get().ok().and_then(|name| name.into_string().ok())
}
