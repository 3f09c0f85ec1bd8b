// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # ecdebug-protocol
//!
//! Text/binary codec for the embedded controller's raw debug console.
//!
//! The protocol layer is responsible for:
//! - Parsing hex sentences (`"00 f0 38 00 03 00"`) into bounded byte buffers
//! - Framing parsed bytes as mailbox requests (type, command, payload)
//! - Rendering raw responses as annotated hex dumps
//!
//! The protocol layer does NOT handle:
//! - Talking to the controller (that's the mailbox transport's job)
//! - Serializing access between concurrent callers (see `ecdebug-session`)
//!
//! ## Wire Request Format
//!
//! ```text
//! ┌───────────────┬───────────┬────────────────────┐
//! │ Message type  │ Command   │ Payload            │
//! │ (2 bytes, BE) │ (1 byte)  │ (0..31 bytes)      │
//! └───────────────┴───────────┴────────────────────┘
//! ```
//!
//! The command byte is the first byte of the mailbox data area, so command
//! plus payload never exceed [`DATA_SIZE`].
//!
//! ## Example
//!
//! ```rust
//! use ecdebug_protocol::{dump, hex, request, REQUEST_CAPACITY};
//!
//! let bytes = hex::parse("00 f0 38 00 03 00", REQUEST_CAPACITY)?;
//! let request = request::build(&bytes)?;
//! assert_eq!(request.msg_type(), 0x00f0);
//! assert_eq!(request.command(), 0x38);
//! assert_eq!(request.payload(), &[0x00, 0x03, 0x00]);
//!
//! let text = dump::format(b"12/21/18", 8);
//! assert!(text.contains("31 32 2f 32 31 2f 31 38"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dump;
pub mod error;
pub mod hex;
pub mod message;
pub mod request;
pub mod response;

pub use dump::{DumpOptions, DUMP_CAPACITY};
pub use error::{BuildError, BuildResult, CapacityError, ParseError, ParseResult};
pub use hex::ParsedBytes;
pub use message::{MessageType, RequestFlags};
pub use request::{Request, EXTENDED_SENTINEL};
pub use response::Response;

/// Mailbox data area size for regular requests and responses
pub const DATA_SIZE: usize = 32;

/// Mailbox data area size when the extended data flag is set
pub const EXTENDED_DATA_SIZE: usize = 256;

/// Bytes occupied by the message type at the start of a hex sentence
pub const TYPE_SIZE: usize = 2;

/// Largest number of bytes a hex sentence can contribute to a request
pub const REQUEST_CAPACITY: usize = TYPE_SIZE + DATA_SIZE;

/// Largest request payload (the command byte takes the first data slot)
pub const PAYLOAD_CAPACITY: usize = DATA_SIZE - 1;

/// Smallest valid request: two type bytes plus the command byte
pub const MIN_REQUEST_LEN: usize = TYPE_SIZE + 1;

/// Largest hex sentence accepted by a console write
pub const INPUT_CAPACITY: usize = EXTENDED_DATA_SIZE * 4;
