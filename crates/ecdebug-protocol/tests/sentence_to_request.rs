use ecdebug_protocol::{
    dump, hex, request, BuildError, ParseError, RequestFlags, DATA_SIZE, EXTENDED_DATA_SIZE,
    PAYLOAD_CAPACITY, REQUEST_CAPACITY,
};

/// Route crate logs to the test harness; `RUST_LOG=ecdebug_protocol=trace` shows them
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn frame(sentence: &str) -> Result<request::Request, String> {
    init_test_logging();
    let bytes = hex::parse(sentence, REQUEST_CAPACITY).map_err(|e| e.to_string())?;
    request::build(&bytes).map_err(|e| e.to_string())
}

#[test]
fn ec_firmware_build_date_request() {
    let request = frame("00 f0 38 00 03 00").unwrap();
    assert_eq!(request.msg_type(), 0x00f0);
    assert_eq!(request.command(), 0x38);
    assert_eq!(request.payload(), &[0x00, 0x03, 0x00]);
    assert_eq!(request.flags(), RequestFlags::RAW);
    assert_eq!(request.response_capacity(), DATA_SIZE);
}

#[test]
fn telemetry_long_request_is_extended() {
    let request = frame("00 F6 01").unwrap();
    assert!(request.is_extended());
    assert_eq!(request.response_capacity(), EXTENDED_DATA_SIZE);
}

#[test]
fn two_words_are_too_short() {
    let bytes = hex::parse("00 f0", REQUEST_CAPACITY).unwrap();
    assert_eq!(request::build(&bytes), Err(BuildError::TooShort { len: 2 }));
}

#[test]
fn excess_words_never_reach_the_request() {
    let mut sentence = String::from("00 f2 10");
    for i in 0..64 {
        sentence.push_str(&format!(" {:02x}", i));
    }
    let request = frame(&sentence).unwrap();
    assert_eq!(request.payload().len(), PAYLOAD_CAPACITY);
    assert_eq!(request.payload()[PAYLOAD_CAPACITY - 1], (PAYLOAD_CAPACITY - 1) as u8);
}

#[test]
fn malformed_word_rejects_sentence() {
    let err = hex::parse("00 f0 38 0g", REQUEST_CAPACITY).unwrap_err();
    assert!(matches!(err, ParseError::InvalidToken { ref word } if word == "0g"));
    assert_eq!(err.to_string(), "invalid hex byte: \"0g\"");
}

#[test]
fn response_dump_renders_build_date() {
    let response = [
        0x00, 0x31, 0x32, 0x2f, 0x32, 0x31, 0x2f, 0x31, 0x38, 0x00, 0x38, 0x00, 0x01, 0x00, 0x2f,
        0x00, 0x2a,
    ];
    let text = dump::format(&response, response.len());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(".12/21/18.8.../."));
    assert!(lines[1].starts_with("00000010: 2a"));
    assert!(lines[1].ends_with('*'));
}
