//! Module for cursors over a byte slice.
//!
//! A [`ReadCursor`] only moves forward. Every read first checks that the
//! requested number of bytes is available; if not, the read yields `None` and
//! the cursor stays where it was. Once the bounds check passes the bytes are
//! consumed, even if they turn out not to hold a valid value (bad text, an
//! impossible calendar date).

use chrono::{DateTime, Utc};
use heapless::String;

use crate::codec::{Decode, Encode, Error, FixedSize};
use crate::types::text::TextEncoding;

/// Not a byte writer. It is just a cursor to track where a byte slice is being written.
pub struct WriteCursor<'d> {
    pos: usize,
    data: &'d mut [u8],
}

impl<'d> WriteCursor<'d> {
    /// Creates a new write cursor at the beginning of the data.
    pub fn new(data: &'d mut [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Append byte slice
    pub fn append(&mut self, data: &[u8]) -> Result<(), Error> {
        self.write_ref(data)
    }

    /// Write fixed sized type
    pub fn write<E: Encode>(&mut self, data: E) -> Result<(), Error> {
        self.write_ref(&data)
    }

    /// Write any encodable value, including unsized ones such as `str`.
    pub fn write_ref<E: Encode + ?Sized>(&mut self, data: &E) -> Result<(), Error> {
        let size = data.size();
        if self.available() < size {
            Err(Error::InsufficientSpace)
        } else {
            data.encode(&mut self.data[self.pos..self.pos + size])?;
            self.pos += size;
            Ok(())
        }
    }

    /// Returns amount of bytes that remain available.
    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the current length of the data written.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Returns the byte slice that was written by this cursor.
    pub fn finish(self) -> &'d mut [u8] {
        &mut self.data[..self.pos]
    }
}

#[derive(Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct ReadCursor<'d> {
    pos: usize,
    data: &'d [u8],
}

impl<'d> ReadCursor<'d> {
    pub fn new(data: &'d [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Start reading at `pos`. Returns `None` if `pos` lies past the end of `data`.
    pub fn with_position(data: &'d [u8], pos: usize) -> Option<Self> {
        (pos <= data.len()).then_some(Self { pos, data })
    }

    /// Read a fixed size value.
    pub fn read<T: FixedSize + Decode<'d>>(&mut self) -> Option<T> {
        let src = self.slice(T::SIZE)?;
        T::decode(src)
            .map_err(|e| trace!("[cursor] decode of {} bytes failed: {}", T::SIZE, e))
            .ok()
    }

    /// Read a [GATT date-time](crate::GattDateTime) and compose it into a UTC timestamp.
    pub fn read_date_time(&mut self) -> Option<DateTime<Utc>> {
        self.read()
    }

    /// Read `len` bytes, or everything that is left when `len` is `None`, as UTF-8 text.
    pub fn read_str(&mut self, len: Option<usize>) -> Option<&'d str> {
        let src = self.slice(len.unwrap_or(self.available()))?;
        core::str::from_utf8(src)
            .map_err(|_| trace!("[cursor] invalid utf-8 in {} bytes", src.len()))
            .ok()
    }

    /// Read `len` bytes, or everything that is left when `len` is `None`, as text in `encoding`.
    pub fn read_text<const N: usize>(&mut self, len: Option<usize>, encoding: TextEncoding) -> Option<String<N>> {
        let src = self.slice(len.unwrap_or(self.available()))?;
        encoding
            .decode(src)
            .map_err(|e| trace!("[cursor] text decode of {} bytes failed: {}", src.len(), e))
            .ok()
    }

    /// Take the next `nbytes` bytes as they are.
    pub fn slice(&mut self, nbytes: usize) -> Option<&'d [u8]> {
        if self.available() < nbytes {
            trace!(
                "[cursor] underrun: need {} bytes at {}, have {}",
                nbytes,
                self.pos,
                self.available()
            );
            None
        } else {
            let src = &self.data[self.pos..self.pos + nbytes];
            self.pos += nbytes;
            Some(src)
        }
    }

    /// Bytes left to read.
    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.available() == 0
    }

    pub fn remaining(self) -> &'d [u8] {
        &self.data[self.pos..]
    }
}
