// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-open `std::io` adapter
//!
//! File readers issue many short reads. A session hands its response out
//! once, so the handle takes the whole dump on the first read and serves the
//! rest from its own cursor; once drained, reads return 0 (end of file)
//! until the next write.

use std::io::{self, Cursor, Read, Write};

use tracing::trace;

use crate::session::RawConsole;

/// One open of the console node
pub struct ConsoleHandle<C> {
    console: C,
    output: Option<Cursor<Vec<u8>>>,
}

impl<C: RawConsole> ConsoleHandle<C> {
    pub fn open(console: C) -> Self {
        Self {
            console,
            output: None,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_inner(self) -> C {
        self.console
    }
}

impl<C: RawConsole> Write for ConsoleHandle<C> {
    /// Each call is one complete sentence; partial writes are never reported
    ///
    /// A failed write keeps the rest of a dump this handle is serving.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write(buf)?;
        self.output = None;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<C: RawConsole> Read for ConsoleHandle<C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let console = &self.console;
        let output = self
            .output
            .get_or_insert_with(|| Cursor::new(console.read().into_bytes()));

        let n = output.read(buf)?;
        trace!(n, "console handle read");
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DebugSession;
    use crate::transport::LoopbackMailbox;
    use std::sync::Arc;

    #[test]
    fn test_short_reads_return_whole_dump() {
        let mut handle = ConsoleHandle::open(DebugSession::new(LoopbackMailbox::new()));
        handle.write_all(b"00 f0 38 00 03 00").unwrap();

        let mut text = Vec::new();
        let mut chunk = [0u8; 7];
        loop {
            let n = handle.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            text.extend_from_slice(&chunk[..n]);
        }

        let text = String::from_utf8(text).unwrap();
        assert!(text.starts_with("00000000: 00 f0 38 00 03 00"));
        assert!(text.ends_with("..8...\n"));
        assert_eq!(handle.read(&mut chunk).unwrap(), 0);
    }

    #[test]
    fn test_read_to_string_without_write_is_empty() {
        let mut handle = ConsoleHandle::open(DebugSession::new(LoopbackMailbox::new()));
        let mut text = String::new();
        handle.read_to_string(&mut text).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_write_resets_drained_output() {
        let mut handle = ConsoleHandle::open(DebugSession::new(LoopbackMailbox::new()));
        let mut text = String::new();

        handle.write_all(b"00 f0 01").unwrap();
        handle.read_to_string(&mut text).unwrap();
        assert!(text.contains("00 f0 01"));

        text.clear();
        handle.write_all(b"00 f2 02").unwrap();
        handle.read_to_string(&mut text).unwrap();
        assert!(text.contains("00 f2 02"));
    }

    #[test]
    fn test_failed_write_keeps_unread_dump_tail() {
        let mut handle = ConsoleHandle::open(DebugSession::new(LoopbackMailbox::new()));
        handle.write_all(b"00 f0 38 00 03 00").unwrap();

        let mut head = [0u8; 10];
        assert_eq!(handle.read(&mut head).unwrap(), 10);
        assert_eq!(&head, b"00000000: ");

        let err = handle.write(b"00 f0 zz").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let mut rest = String::new();
        handle.read_to_string(&mut rest).unwrap();
        assert!(rest.starts_with("00 f0 38 00 03 00"));
        assert!(rest.ends_with("..8...\n"));
    }

    #[test]
    fn test_write_error_maps_to_invalid_input() {
        let mut handle = ConsoleHandle::open(DebugSession::new(LoopbackMailbox::new()));
        let err = handle.write(b"00 f0").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_handles_share_one_session() {
        let session = Arc::new(DebugSession::new(LoopbackMailbox::new()));
        let mut writer = ConsoleHandle::open(Arc::clone(&session));
        let mut reader = ConsoleHandle::open(Arc::clone(&session));

        writer.write_all(b"00 f5 07").unwrap();

        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert!(text.contains("00 f5 07"));

        // Already consumed through the other handle
        text.clear();
        writer.read_to_string(&mut text).unwrap();
        assert!(text.is_empty());
    }
}
