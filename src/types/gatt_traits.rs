use chrono::{DateTime, Utc};
use heapless::{String, Vec};

use crate::cursor::ReadCursor;
use crate::types::date_time::GattDateTime;

/// Trait to allow conversion of a whole characteristic value into a type.
///
/// Decoding starts at offset 0 of `data`; bytes left over after the value are ignored.
/// `version` selects the value layout for characteristics whose format has changed
/// over time. Types with a single layout ignore it.
pub trait FromGatt: Sized {
    /// Converts from gatt bytes, `None` if `data` does not hold a valid value.
    fn from_gatt(data: &[u8], version: Option<u8>) -> Option<Self>;
}

macro_rules! fixed {
    ($($ty:ty),*) => {
        $(
            impl FromGatt for $ty {
                fn from_gatt(data: &[u8], _version: Option<u8>) -> Option<Self> {
                    ReadCursor::new(data).read()
                }
            }
        )*
    };
}

fixed!(u8, u16, u32, u64, i8, i16, i32, i64, GattDateTime, DateTime<Utc>);

impl<const N: usize> FromGatt for String<N> {
    fn from_gatt(data: &[u8], _version: Option<u8>) -> Option<Self> {
        let s = ReadCursor::new(data).read_str(None)?;
        String::try_from(s).ok()
    }
}

impl<const N: usize> FromGatt for Vec<u8, N> {
    fn from_gatt(data: &[u8], _version: Option<u8>) -> Option<Self> {
        Vec::from_slice(data).ok()
    }
}
