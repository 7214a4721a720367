//! Compile-time configuration.
//!
//! Sizes shared by the encoder and the reader. They follow the Bluetooth Core
//! and GATT Specification Supplement layouts and are not meant to be tuned.

/// Maximum length of an attribute value.
///
/// Ref: BLUETOOTH CORE SPECIFICATION Version 6.0, Vol 3, Part F, Section 3.2.9 Long attribute values
pub const ATT_MAX_VALUE_LEN: usize = 512;

/// Encoded size of a GATT date-time: u16 year, then month, day, hours, minutes and seconds.
pub const GATT_DATE_TIME_SIZE: usize = 7;
