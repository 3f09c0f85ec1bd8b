// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Raw mailbox response buffer

use crate::error::CapacityError;
use crate::EXTENDED_DATA_SIZE;

/// Response bytes written by the controller
///
/// Capacity is the extended data area; the capacity a particular request
/// allows is carried by the request and checked by the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    bytes: heapless::Vec<u8, EXTENDED_DATA_SIZE>,
}

impl Response {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `data` into a new response
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `data` is longer than the extended data area
    pub fn from_slice(data: &[u8]) -> Result<Self, CapacityError> {
        let mut response = Self::new();
        response.extend_from_slice(data)?;
        Ok(response)
    }

    /// Append bytes, rejecting the whole slice if it would overflow
    pub fn extend_from_slice(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        self.bytes
            .extend_from_slice(data)
            .map_err(|()| CapacityError {
                len: self.bytes.len() + data.len(),
                capacity: EXTENDED_DATA_SIZE,
            })
    }

    /// Append one byte
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        self.bytes.push(byte).map_err(|_| CapacityError {
            len: self.bytes.len() + 1,
            capacity: EXTENDED_DATA_SIZE,
        })
    }

    /// Shorten to `len` bytes (no-op if already shorter)
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    /// Number of bytes the controller wrote
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Response {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
