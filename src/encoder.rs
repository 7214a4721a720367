//! Owned encodings of characteristic values.

use heapless::Vec;

use crate::codec::{Encode, Error};
use crate::config::ATT_MAX_VALUE_LEN;
use crate::cursor::WriteCursor;

/// The bytes of an encoded characteristic value.
pub type EncodedValue<const N: usize = ATT_MAX_VALUE_LEN> = Vec<u8, N>;

/// Encode `value` into a new buffer of capacity `N`.
///
/// Fails with [`Error::InsufficientSpace`] if the value needs more than `N` bytes,
/// or with the value's own error (e.g. [`Error::EncodingFailed`]) if it cannot be
/// represented at all. No partially encoded value is ever returned.
pub fn encode<E: Encode + ?Sized, const N: usize>(value: &E) -> Result<EncodedValue<N>, Error> {
    let mut out = Vec::new();
    out.resize_default(value.size()).map_err(|_| Error::InsufficientSpace)?;
    value.encode(&mut out)?;
    Ok(out)
}

/// Encode `value` at the start of `dest`, returning the number of bytes written.
pub fn encode_into<E: Encode + ?Sized>(value: &E, dest: &mut [u8]) -> Result<usize, Error> {
    let mut w = WriteCursor::new(dest);
    w.write_ref(value)?;
    Ok(w.len())
}
