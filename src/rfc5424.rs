use std::fmt::Write;

use crate::procid::ProcId;
use crate::timestamp::encode_timestamp;
use crate::Message;

/// Serialize a `Message` into the RFC 5424 wire layout:
///
/// ```text
/// <PRI>1 TIMESTAMP HOSTNAME APPNAME PROCID MSGID MSG
/// ```
///
/// <https://datatracker.ietf.org/doc/html/rfc5424#section-6>
///
/// The output is one line with single-space separators and no trailing
/// newline; the datagram boundary is the only framing. Identical inputs
/// always produce byte-identical output.
///
/// The free-text MSG part is appended verbatim. Embedded control
/// characters are the caller's problem, this matches what collectors in
/// the wild accept and is a deliberate compatibility choice.
pub fn encode_message<S: AsRef<str> + Clone>(msg: &Message<S>) -> String {
    let mut out = String::with_capacity(48 + msg.msg.as_ref().len());

    // PRIVAL is facility * 8 + severity, at most three digits, no
    // leading zeros. VERSION is the literal `1`.
    //
    // https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.1
    let pri = msg.severity.priority(msg.facility);
    let _ = write!(out, "<{pri}>1 ");

    encode_timestamp(msg.timestamp, &mut out);

    out.push(' ');
    push_field(&mut out, msg.hostname.as_ref().map(AsRef::as_ref));
    out.push(' ');
    push_field(&mut out, msg.appname.as_ref().map(AsRef::as_ref));
    out.push(' ');
    match &msg.procid {
        ProcId::PID(pid) => {
            let _ = write!(out, "{pid}");
        }
        ProcId::Name(name) => push_field(&mut out, Some(name.as_ref())),
    }
    out.push(' ');
    push_field(&mut out, msg.msgid.as_ref().map(AsRef::as_ref));

    let text = msg.msg.as_ref();
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }

    out
}

/// HOSTNAME, APP-NAME and MSGID must be PRINTUSASCII (%d33-126): a space
/// or control character in a header field would shift every later field
/// at the receiver. Offending characters are dropped, and a field left
/// empty renders as the NILVALUE `-`.
#[inline]
fn push_field(out: &mut String, value: Option<&str>) {
    let start = out.len();
    if let Some(value) = value {
        out.extend(value.chars().filter(|ch| ('!'..='~').contains(ch)));
    }

    if out.len() == start {
        out.push('-');
    }
}
