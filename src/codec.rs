//! Opinionated GATT value codec
//!
//! Assumes little endian for all multi-byte types

use core::fmt::{Display, Formatter};

/// A type that always occupies exactly `SIZE` bytes on the wire.
pub trait FixedSize: Sized {
    const SIZE: usize;
}

/// A type with a known encoded size.
pub trait Type {
    fn size(&self) -> usize;
}

/// Encode a value into the start of `dest`.
///
/// `dest` must be at least [`Type::size`] bytes long, otherwise
/// [`Error::InsufficientSpace`] is returned and nothing is written.
pub trait Encode: Type {
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Decode a value from a slice holding exactly its encoded bytes.
pub trait Decode<'d>: Type + Sized {
    fn decode(src: &'d [u8]) -> Result<Self, Error>;
}

impl<T: FixedSize> Type for T {
    fn size(&self) -> usize {
        Self::SIZE
    }
}

impl Type for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Encode for str {
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
        self.as_bytes().encode(dest)
    }
}

impl Type for [u8] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Encode for [u8] {
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
        dest.get_mut(..self.len())
            .ok_or(Error::InsufficientSpace)?
            .copy_from_slice(self);
        Ok(())
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The buffer is too short for the requested value.
    InsufficientSpace,
    /// The bytes are present but do not form a valid value of the requested type.
    InvalidValue,
    /// The source value cannot be represented in the wire format.
    EncodingFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InsufficientSpace => f.write_str("insufficient space"),
            Error::InvalidValue => f.write_str("invalid value"),
            Error::EncodingFailed => f.write_str("encoding failed"),
        }
    }
}

impl core::error::Error for Error {}
