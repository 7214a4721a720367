//! A codec for Bluetooth Low Energy GATT characteristic values.
//!
//! Values are packed into and out of raw byte buffers as the transport reads,
//! writes or notifies them:
//!
//! * fixed width integers, little endian
//! * text, as raw bytes without length prefix or terminator
//! * opaque byte strings, passed through unchanged
//! * date-times, in the 7 byte GATT date-time layout
//!
//! Encoding goes through the [`Encode`] trait, either into a caller buffer with
//! a [`WriteCursor`] or into an owned [`EncodedValue`]. Decoding walks the
//! buffer field by field with a [`ReadCursor`]; a read that does not fit in
//! what is left of the buffer returns `None` and leaves the cursor untouched.
//!
//! ```
//! use trouble_gatt_codec::{EncodedValue, ReadCursor, encode};
//!
//! let value: EncodedValue<8> = encode(&0x0102u16).unwrap();
//! assert_eq!(&value[..], &[0x02, 0x01]);
//!
//! let mut r = ReadCursor::new(&value);
//! assert_eq!(r.read::<u16>(), Some(0x0102));
//! assert_eq!(r.read::<u8>(), None);
//! ```
#![no_std]

mod fmt;

pub mod codec;
pub mod config;
pub mod cursor;
pub mod encoder;
pub mod types;

pub use codec::{Decode, Encode, Error, FixedSize, Type};
pub use cursor::{ReadCursor, WriteCursor};
pub use encoder::{encode, encode_into, EncodedValue};
pub use types::date_time::GattDateTime;
pub use types::gatt_traits::FromGatt;
pub use types::text::TextEncoding;
