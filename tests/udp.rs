use std::net::UdpSocket;
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use remote_syslog::timestamp::from_unix_millis;
use remote_syslog::{Error, Facility, SendOptions, Sender, SenderConfig, Severity};

fn listener() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let port = socket.local_addr().unwrap().port();

    (socket, port)
}

fn recv(socket: &UdpSocket) -> String {
    let mut buf = [0u8; 2048];
    let (len, _) = socket.recv_from(&mut buf).unwrap();

    String::from_utf8(buf[..len].to_vec()).unwrap()
}

fn sender_to(port: u16, config: SenderConfig) -> Sender {
    Sender::new(SenderConfig {
        target_host: "127.0.0.1".to_string(),
        target_port: port,
        ..config
    })
    .unwrap()
}

#[test]
fn smallest_testable_example() {
    let (socket, port) = listener();
    let sender = sender_to(port, SenderConfig::default());

    sender.send(
        Severity::NOTICE,
        "I'm awake!",
        SendOptions {
            timestamp: from_unix_millis(1521416285134),
            ..Default::default()
        },
    );

    let hostname = sender.hostname().unwrap_or("-").to_string();
    let pid = process::id();
    assert_eq!(
        recv(&socket),
        format!("<133>1 2018-03-18T23:38:05.134Z {hostname} - {pid} - I'm awake!")
    );
}

#[test]
fn overriding_hostname_appname_facility_and_msgid() {
    let (socket, port) = listener();
    let sender = sender_to(
        port,
        SenderConfig {
            hostname: Some("sender".to_string()),
            appname: Some("appname".to_string()),
            facility: Facility::LOCAL7,
            ..Default::default()
        },
    );

    sender.send(
        Severity::EMERG,
        "I'm awake!",
        SendOptions {
            timestamp: from_unix_millis(1521416285134),
            msgid: Some("operation"),
            ..Default::default()
        },
    );

    let pid = process::id();
    assert_eq!(
        recv(&socket),
        format!("<184>1 2018-03-18T23:38:05.134Z sender appname {pid} operation I'm awake!")
    );
}

#[test]
fn per_call_overrides_beat_endpoint_defaults() {
    let (socket, port) = listener();
    let sender = sender_to(
        port,
        SenderConfig {
            hostname: Some("default-host".to_string()),
            appname: Some("default-app".to_string()),
            ..Default::default()
        },
    );

    sender.send(
        Severity::WARNING,
        "override me",
        SendOptions {
            timestamp: from_unix_millis(1521416285134),
            hostname: Some("other-host"),
            appname: Some("other-app"),
            facility: Some(Facility::DAEMON),
            msgid: Some("op"),
        },
    );

    let pid = process::id();
    assert_eq!(
        recv(&socket),
        format!("<28>1 2018-03-18T23:38:05.134Z other-host other-app {pid} op override me")
    );
}

#[test]
fn exactly_one_datagram_per_send() {
    let (socket, port) = listener();
    let sender = sender_to(port, SenderConfig::default());

    sender.send(Severity::INFO, "only one", SendOptions::default());

    recv(&socket);
    socket
        .set_read_timeout(Some(Duration::from_millis(50)))
        .unwrap();
    let mut buf = [0u8; 64];
    assert!(socket.recv_from(&mut buf).is_err(), "unexpected second datagram");
}

#[test]
fn transmission_failure_reaches_the_handler() {
    // .invalid never resolves (RFC 2606), and resolution happens per send
    let mut sender = Sender::new(SenderConfig {
        target_host: "collector.invalid".to_string(),
        ..Default::default()
    })
    .unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let errors = Arc::clone(&seen);
    sender.set_error_handler(move |err| {
        errors
            .lock()
            .unwrap()
            .push(matches!(err, Error::Transmission(_)));
    });

    sender.send(Severity::ERR, "going nowhere", SendOptions::default());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0], "expected Error::Transmission");
}

#[test]
fn unobserved_transmission_failure_does_not_panic() {
    let sender = Sender::new(SenderConfig {
        target_host: "collector.invalid".to_string(),
        ..Default::default()
    })
    .unwrap();

    // no handler registered: the failure is logged and discarded
    sender.send(Severity::ERR, "going nowhere", SendOptions::default());
}
