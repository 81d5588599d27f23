//! Sequential typed access to a caller-owned byte buffer
//!
//! Protocol headers are laid out field by field in declaration order. The
//! cursor walks a borrowed buffer the same way: each `consume` or `produce`
//! moves the position forward by exactly the width of the value's type, and
//! every access is checked against the end of the buffer first.

use crate::byteorder::NetworkOrder;
use crate::error::{Error, Result};

/// A position within a caller-owned mutable byte buffer.
///
/// The cursor never owns the buffer; the `&mut` borrow keeps the buffer
/// alive for every operation and makes concurrent use of one cursor
/// unrepresentable. A failed operation leaves the position unchanged.
///
/// # Examples
///
/// ```
/// use wireprim::Cursor;
///
/// let mut buf = [0u8; 8];
/// let mut cursor = Cursor::new(&mut buf);
/// cursor.produce::<u16>(0x0800).unwrap();
/// cursor.produce::<u32>(0xC0A80101).unwrap();
/// assert_eq!(cursor.position(), 6);
///
/// let mut cursor = Cursor::new(&mut buf);
/// assert_eq!(cursor.consume::<u16>().unwrap(), 0x0800);
/// assert_eq!(cursor.consume::<u32>().unwrap(), 0xC0A80101);
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(Error::BufferExhausted { needed, remaining });
        }
        Ok(())
    }

    /// Read a `T` stored in network byte order at the position and advance
    /// by `T::WIDTH` bytes, returning the value in host order.
    pub fn consume<T: NetworkOrder>(&mut self) -> Result<T> {
        self.check(T::WIDTH)?;
        let value = T::read_be(&self.buf[self.pos..]);
        self.pos += T::WIDTH;
        Ok(value)
    }

    /// Write `value` in network byte order at the position and advance by
    /// `T::WIDTH` bytes.
    pub fn produce<T: NetworkOrder>(&mut self, value: T) -> Result<()> {
        self.check(T::WIDTH)?;
        value.write_be(&mut self.buf[self.pos..]);
        self.pos += T::WIDTH;
        Ok(())
    }

    /// Advance past `n` bytes without decoding them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.check(n)?;
        self.pos += n;
        Ok(())
    }
}
