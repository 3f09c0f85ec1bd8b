// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mailbox request framing
//!
//! Parsed sentence bytes map onto a request as:
//!
//! ```text
//! [0x00] [0xf0] [0x38] [0x00, 0x03, 0x00]
//!   │      │      │      └─ Payload (MBOX[1..])
//!   │      │      └─ Command (MBOX[0])
//!   └──────┴─ Message type, big-endian: 0x00f0
//! ```

use tracing::debug;

use crate::error::{BuildError, BuildResult};
use crate::message::{MessageType, RequestFlags};
use crate::{DATA_SIZE, EXTENDED_DATA_SIZE, MIN_REQUEST_LEN, PAYLOAD_CAPACITY, REQUEST_CAPACITY};

/// Message type whose response uses the extended data area
pub const EXTENDED_SENTINEL: u16 = MessageType::TelemetryLong as u16;

/// Request payload, bounded by the mailbox data area
pub type Payload = heapless::Vec<u8, PAYLOAD_CAPACITY>;

/// Framed bytes of a request (type, command, payload)
pub type WireBytes = heapless::Vec<u8, REQUEST_CAPACITY>;

/// A raw mailbox request ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    msg_type: u16,
    command: u8,
    payload: Payload,
    flags: RequestFlags,
    response_capacity: usize,
}

impl Request {
    /// Create a request, deriving flags and response capacity from `msg_type`
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::PayloadTooLong`] if `payload` exceeds
    /// [`PAYLOAD_CAPACITY`]
    pub fn new(msg_type: u16, command: u8, payload: &[u8]) -> BuildResult<Self> {
        let payload = Payload::from_slice(payload).map_err(|()| BuildError::PayloadTooLong {
            len: payload.len(),
            capacity: PAYLOAD_CAPACITY,
        })?;

        Ok(Self {
            msg_type,
            command,
            payload,
            flags: flags_for(msg_type),
            response_capacity: response_capacity_for(msg_type),
        })
    }

    pub fn msg_type(&self) -> u16 {
        self.msg_type
    }

    /// Well-known name of the message type, if any
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::try_from(self.msg_type).ok()
    }

    pub fn command(&self) -> u8 {
        self.command
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn flags(&self) -> RequestFlags {
        self.flags
    }

    /// Most bytes the controller may write back for this request
    pub fn response_capacity(&self) -> usize {
        self.response_capacity
    }

    pub fn is_extended(&self) -> bool {
        self.flags.contains(RequestFlags::EXTENDED_DATA)
    }

    /// Frame as `type_hi type_lo command payload...`
    pub fn to_wire(&self) -> WireBytes {
        let mut wire = WireBytes::new();
        // TYPE_SIZE + 1 + PAYLOAD_CAPACITY == REQUEST_CAPACITY
        let _ = wire.extend_from_slice(&self.msg_type.to_be_bytes());
        let _ = wire.push(self.command);
        let _ = wire.extend_from_slice(&self.payload);
        wire
    }
}

/// Frame parsed sentence bytes as a request
///
/// # Errors
///
/// - [`BuildError::TooShort`] if fewer than three bytes were parsed
/// - [`BuildError::PayloadTooLong`] if more than [`REQUEST_CAPACITY`] bytes
///   were supplied
pub fn build(bytes: &[u8]) -> BuildResult<Request> {
    if bytes.len() < MIN_REQUEST_LEN {
        return Err(BuildError::TooShort { len: bytes.len() });
    }

    let msg_type = u16::from_be_bytes([bytes[0], bytes[1]]);
    let request = Request::new(msg_type, bytes[2], &bytes[MIN_REQUEST_LEN..])?;

    debug!(
        msg_type,
        command = request.command,
        payload_len = request.payload.len(),
        extended = request.is_extended(),
        "framed raw mailbox request"
    );

    Ok(request)
}

/// Response capacity selected by a message type
pub fn response_capacity_for(msg_type: u16) -> usize {
    if msg_type == EXTENDED_SENTINEL {
        EXTENDED_DATA_SIZE
    } else {
        DATA_SIZE
    }
}

/// Request flags selected by a message type
pub fn flags_for(msg_type: u16) -> RequestFlags {
    if msg_type == EXTENDED_SENTINEL {
        RequestFlags::RAW | RequestFlags::EXTENDED_DATA
    } else {
        RequestFlags::RAW
    }
}
