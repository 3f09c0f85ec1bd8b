use std::io::{Read, Write};
use std::sync::Arc;

use ecdebug::config::load_config;
use ecdebug::prelude::*;
use ecdebug::protocol::{DATA_SIZE, EXTENDED_DATA_SIZE};

/// Stand-in controller answering a few legacy commands
#[derive(Default)]
struct FakeController {
    requests: Vec<(u16, u8, Vec<u8>)>,
}

impl Mailbox for FakeController {
    fn send(&mut self, request: &Request) -> TransportResult<Response> {
        self.requests
            .push((request.msg_type(), request.command(), request.payload().to_vec()));

        match (request.message_type(), request.command()) {
            // Firmware build date, status byte first
            (Some(MessageType::Legacy), 0x38) => {
                let mut response = Response::new();
                response.push(0x00).unwrap();
                response.extend_from_slice(b"12/21/18").unwrap();
                Ok(response)
            }
            (Some(MessageType::TelemetryLong), _) => {
                let bytes: Vec<u8> = (0..=255u8).collect();
                Ok(Response::from_slice(&bytes).unwrap())
            }
            (Some(MessageType::Legacy), 0xee) => Err(TransportError::Busy),
            _ => Err(TransportError::ControllerStatus(0x01)),
        }
    }
}

fn read_all(handle: &mut impl Read) -> String {
    let mut text = String::new();
    handle.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn build_date_through_configured_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ecdebug.toml");
    std::fs::write(&path, "[console]\nname = \"raw\"\n[dump]\noffsets = true\n").unwrap();

    let config = load_config(Some(&path), None).unwrap();
    let session = Arc::new(ecdebug::open_session(FakeController::default(), &config));
    let mut handle = ConsoleHandle::open(Arc::clone(&session));

    handle.write_all(b"00 f0 38 00 03 00\n").unwrap();
    let text = read_all(&mut handle);

    assert_eq!(
        text,
        "00000000: 00 31 32 2f 32 31 2f 31 38                       .12/21/18\n"
    );
    assert_eq!(
        session.with_mailbox(|c| c.requests.clone()),
        vec![(0x00f0, 0x38, vec![0x00, 0x03, 0x00])]
    );
}

#[test]
fn extended_telemetry_dump_is_complete() {
    let session = DebugSession::new(FakeController::default());
    session.write("00 f6 00").unwrap();

    let text = session.read();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), EXTENDED_DATA_SIZE / 16);
    assert!(lines[0].starts_with("00000000: 00 01 02 03"));
    assert!(lines[15].starts_with("000000f0: f0 f1 f2"));
    assert!(lines[2].ends_with(" !\"#$%&'()*+,-./"));
}

#[test]
fn errors_surface_through_handle() {
    let session = Arc::new(DebugSession::new(FakeController::default()));
    let mut handle = ConsoleHandle::open(Arc::clone(&session));

    let err = handle.write(b"00 f0 ee").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::Other);

    let err = handle.write(b"00 f0 xyz").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);

    let err = handle.write(b"f0").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(session.with_mailbox(|c| c.requests.len()) == 1);

    assert_eq!(read_all(&mut handle), "");
}

#[test]
fn unknown_controller_status_leaves_session_idle() {
    let session = DebugSession::new(FakeController::default());
    session.write("00 f0 38").unwrap();

    let err = session.write("00 f2 10 01").unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Transport(TransportError::ControllerStatus(0x01))
    ));
    assert!(!err.is_input_error());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn legacy_response_never_exceeds_data_size() {
    let session = DebugSession::new(LoopbackMailbox::new());
    let sentence = vec!["ab"; 40].join(" ");
    session.write(&sentence).unwrap();

    let text = session.read();
    let bytes = text
        .lines()
        .map(|l| l[10..57].split_whitespace().count())
        .sum::<usize>();
    assert_eq!(bytes, DATA_SIZE);
}
