//! Text encodings for string characteristic values.

use heapless::String;

use crate::codec::Error;

/// How the bytes of a text field are interpreted.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, the encoding of every GATT `utf8s` characteristic.
    #[default]
    Utf8,
    /// 7-bit ASCII; any byte above `0x7f` is invalid.
    Ascii,
    /// ISO-8859-1, every byte maps to the code point of the same value.
    Latin1,
    /// UTF-16, little endian, without byte order mark.
    Utf16Le,
}

impl TextEncoding {
    /// Decode `src` into an owned string of capacity `N`.
    ///
    /// Fails with [`Error::InvalidValue`] if `src` is not valid in this encoding and
    /// with [`Error::InsufficientSpace`] if the decoded text does not fit in `N` bytes.
    pub fn decode<const N: usize>(self, src: &[u8]) -> Result<String<N>, Error> {
        let mut out = String::new();
        match self {
            TextEncoding::Utf8 => {
                let s = core::str::from_utf8(src).map_err(|_| Error::InvalidValue)?;
                out.push_str(s).map_err(|_| Error::InsufficientSpace)?;
            }
            TextEncoding::Ascii => {
                if !src.is_ascii() {
                    return Err(Error::InvalidValue);
                }
                for &b in src {
                    out.push(char::from(b)).map_err(|_| Error::InsufficientSpace)?;
                }
            }
            TextEncoding::Latin1 => {
                for &b in src {
                    out.push(char::from(b)).map_err(|_| Error::InsufficientSpace)?;
                }
            }
            TextEncoding::Utf16Le => {
                if src.len() % 2 != 0 {
                    return Err(Error::InvalidValue);
                }
                let units = src.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]]));
                for c in char::decode_utf16(units) {
                    let c = c.map_err(|_| Error::InvalidValue)?;
                    out.push(c).map_err(|_| Error::InsufficientSpace)?;
                }
            }
        }
        Ok(out)
    }
}
