use heapless::Vec;

use super::headers::{HttpMethod, parse_request_line};
use crate::{command::Command, config::REQUEST_HEAD_CAPACITY};

/// Outcome of feeding one receipt to a [`RequestBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    /// Zero-length delivery before a request line arrived: nothing to answer
    Closed,
    /// Zero-length delivery after the request line: dispatch what was buffered
    Ended,
    /// Head not terminated yet, keep reading
    Pending,
    /// Blank line seen, head ready to dispatch
    Complete,
    /// Buffer full before the blank line; the head is dispatched as-is
    Overflow,
}

impl Receipt {
    /// Whether the buffered head should be dispatched now.
    pub fn is_ready(self) -> bool {
        matches!(self, Receipt::Complete | Receipt::Ended | Receipt::Overflow)
    }
}

/// Accumulates the bytes of one request head across receipts.
#[derive(Debug, Clone, Default)]
pub struct RequestBuffer {
    bytes: Vec<u8, REQUEST_HEAD_CAPACITY>,
    head_end: Option<usize>,
}

impl RequestBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            head_end: None,
        }
    }

    /// Build a buffer from a request that arrived in one piece.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.receive(bytes);
        buffer
    }

    /// Append one receipt and report how far the head got.
    ///
    /// Lines may end in CRLF or a bare LF. Bytes past the capacity, or after
    /// the head is complete, are dropped.
    pub fn receive(&mut self, chunk: &[u8]) -> Receipt {
        if chunk.is_empty() {
            return if self.has_request_line() {
                Receipt::Ended
            } else {
                Receipt::Closed
            };
        }
        if self.head_end.is_some() {
            return Receipt::Complete;
        }

        let room = self.bytes.capacity() - self.bytes.len();
        let taken = &chunk[..chunk.len().min(room)];
        // cannot fail, `taken` fits the remaining room
        let _ = self.bytes.extend_from_slice(taken);

        if let Some(end) = find_head_end(&self.bytes) {
            self.head_end = Some(end);
            return Receipt::Complete;
        }
        if self.bytes.is_full() {
            Receipt::Overflow
        } else {
            Receipt::Pending
        }
    }

    /// Whether a whole request line has been buffered.
    pub fn has_request_line(&self) -> bool {
        lines(&self.bytes).any(|(line, _)| !line.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.head_end.is_some()
    }

    /// The head up to and including the blank line, or everything buffered
    /// when no blank line was seen.
    pub fn head(&self) -> &[u8] {
        let end = self.head_end.unwrap_or(self.bytes.len());
        &self.bytes[..end]
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.head_end = None;
    }
}

/// Pick the command a request head asks for.
///
/// Only the request line is inspected, so a command path that shows up in a
/// header selects nothing. Verbs other than `GET` select nothing either.
/// Blank lines ahead of the request line are skipped.
pub fn route(head: &[u8]) -> Option<Command> {
    let line = request_line(head);
    let line = core::str::from_utf8(line).ok()?;
    let (HttpMethod::Get, target) = parse_request_line(line)?;
    Command::from_target(target)
}

/// First non-empty line of `head`, without its terminator. An unterminated
/// tail counts as a line.
fn request_line(head: &[u8]) -> &[u8] {
    let start = head
        .iter()
        .position(|&b| b != b'\r' && b != b'\n')
        .unwrap_or(head.len());
    let rest = &head[start..];
    let line = match rest.iter().position(|&b| b == b'\n') {
        Some(end) => &rest[..end],
        None => rest,
    };
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Terminated lines of `bytes` with the offset just past each terminator.
/// A trailing CR is stripped from every line.
fn lines(bytes: &[u8]) -> impl Iterator<Item = (&[u8], usize)> {
    let mut start = 0;
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'\n')
        .map(move |(newline, _)| {
            let line = &bytes[start..newline];
            start = newline + 1;
            (line.strip_suffix(b"\r").unwrap_or(line), newline + 1)
        })
}

/// Offset just past the blank line that ends the head. Blank lines ahead of
/// the request line do not end it.
fn find_head_end(bytes: &[u8]) -> Option<usize> {
    let mut seen_line = false;
    for (line, end) in lines(bytes) {
        if !line.is_empty() {
            seen_line = true;
        } else if seen_line {
            return Some(end);
        }
    }
    None
}
