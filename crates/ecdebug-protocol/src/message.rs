// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mailbox message types and request flags
//!
//! | Type     | Name            | Response size |
//! |----------|-----------------|---------------|
//! | `0x00F0` | Legacy          | 32            |
//! | `0x00F2` | Property        | 32            |
//! | `0x00F5` | Telemetry short | 32            |
//! | `0x00F6` | Telemetry long  | 256           |
//!
//! The console frames any type; these names only label log output.

use std::fmt;

/// Well-known mailbox message types
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Execute a legacy command
    Legacy = 0x00f0,
    /// Read or write an NVRAM property
    Property = 0x00f2,
    /// Telemetry with a regular response
    TelemetryShort = 0x00f5,
    /// Telemetry with an extended response
    TelemetryLong = 0x00f6,
}

impl MessageType {
    /// Short lowercase name used in logs
    pub fn name(self) -> &'static str {
        match self {
            MessageType::Legacy => "legacy",
            MessageType::Property => "property",
            MessageType::TelemetryShort => "telemetry-short",
            MessageType::TelemetryLong => "telemetry-long",
        }
    }
}

impl TryFrom<u16> for MessageType {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x00f0 => Ok(MessageType::Legacy),
            0x00f2 => Ok(MessageType::Property),
            0x00f5 => Ok(MessageType::TelemetryShort),
            0x00f6 => Ok(MessageType::TelemetryLong),
            other => Err(other),
        }
    }
}

impl From<MessageType> for u16 {
    fn from(value: MessageType) -> Self {
        value as u16
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x})", self.name(), *self as u16)
    }
}

bitflags::bitflags! {
    /// Flags carried by a mailbox request
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RequestFlags: u8 {
        /// Controller sends no response
        const NO_RESPONSE = 1 << 0;
        /// Response uses the extended data area
        const EXTENDED_DATA = 1 << 1;
        /// Request bytes are sent without a header rewrite
        const RAW_REQUEST = 1 << 2;
        /// Response bytes are returned without status stripping
        const RAW_RESPONSE = 1 << 3;
        /// Raw in both directions
        const RAW = Self::RAW_REQUEST.bits() | Self::RAW_RESPONSE.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_round_trip() {
        for ty in [
            MessageType::Legacy,
            MessageType::Property,
            MessageType::TelemetryShort,
            MessageType::TelemetryLong,
        ] {
            assert_eq!(MessageType::try_from(u16::from(ty)), Ok(ty));
        }
        assert_eq!(MessageType::try_from(0x1234), Err(0x1234));
    }

    #[test]
    fn test_display() {
        assert_eq!(MessageType::Legacy.to_string(), "legacy (0x00f0)");
    }

    #[test]
    fn test_raw_flag_composition() {
        assert!(RequestFlags::RAW.contains(RequestFlags::RAW_REQUEST));
        assert!(RequestFlags::RAW.contains(RequestFlags::RAW_RESPONSE));
        assert!(!RequestFlags::RAW.contains(RequestFlags::EXTENDED_DATA));
        assert_eq!(RequestFlags::RAW.bits(), 0x0c);
    }
}
