//! Alignment-aware, zero-copy read cursor over a CDR buffer.

use bytes::{Buf, Bytes};

use crate::error::DecodeError;

/// A consuming view over a byte buffer with an offset counter used for
/// alignment.
///
/// The offset starts at 0 when the cursor is created, which is not
/// necessarily the start of the original stream: see
/// [`remaining_as_new_cursor`](Self::remaining_as_new_cursor).
/// `offset() + remaining() == total_length()` holds at all times.
#[derive(Debug, Clone)]
pub struct CdrCursor {
    buf: Bytes,
    initial_len: usize,
}

impl CdrCursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        let buf = buf.into();
        let initial_len = buf.len();
        Self { buf, initial_len }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    pub fn offset(&self) -> usize {
        self.initial_len - self.buf.remaining()
    }

    pub fn total_length(&self) -> usize {
        self.initial_len
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn ensure(&self, requested: usize) -> Result<(), DecodeError> {
        if self.buf.remaining() < requested {
            return Err(DecodeError::OutOfBounds {
                offset: self.offset(),
                requested,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    /// Take the next `n` bytes. The returned view shares the underlying allocation.
    pub fn consume(&mut self, n: usize) -> Result<Bytes, DecodeError> {
        self.ensure(n)?;
        Ok(self.buf.split_to(n))
    }

    pub fn consume_u8(&mut self) -> Result<u8, DecodeError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Take the next `N` bytes as a fixed-size word, e.g. for `f64::from_le_bytes`.
    pub fn consume_as_word<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        self.ensure(N)?;
        let mut word = [0u8; N];
        self.buf.copy_to_slice(&mut word);
        Ok(word)
    }

    /// Skip padding so that the offset becomes a multiple of `n`.
    pub fn align(&mut self, n: usize) -> Result<(), DecodeError> {
        if n <= 1 {
            return Ok(());
        }
        let misalignment = self.offset() % n;
        if misalignment == 0 {
            return Ok(());
        }
        let pad = n - misalignment;
        self.ensure(pad)?;
        self.buf.advance(pad);
        Ok(())
    }

    /// The next `n` bytes, without advancing.
    pub fn peek(&self, n: usize) -> Result<Bytes, DecodeError> {
        self.ensure(n)?;
        Ok(self.buf.slice(..n))
    }

    /// A new cursor over the unconsumed bytes whose offset restarts at 0.
    ///
    /// Alignment inside an encapsulated payload is relative to the first
    /// payload byte, so the body is decoded through a cursor obtained here
    /// right after the encapsulation header.
    pub fn remaining_as_new_cursor(&self) -> Self {
        Self::new(self.buf.clone())
    }
}

impl From<Bytes> for CdrCursor {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for CdrCursor {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}
