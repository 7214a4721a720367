//! GATT date-time.
//!
//! Ref: GATT Specification Supplement, Date Time characteristic (0x2A08).
//!
//! | Field  | Type | Bytes |
//! |--------|------|-------|
//! | year   | u16  | 0..2  |
//! | month  | u8   | 2     |
//! | day    | u8   | 3     |
//! | hours  | u8   | 4     |
//! | minute | u8   | 5     |
//! | second | u8   | 6     |
//!
//! Timestamps are always interpreted in the proleptic Gregorian calendar, in UTC.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::codec::{Decode, Encode, Error, FixedSize};
use crate::config::GATT_DATE_TIME_SIZE;
use crate::cursor::{ReadCursor, WriteCursor};

/// The raw calendar fields of a GATT date-time.
///
/// The fields are not validated; use [`GattDateTime::to_date_time`] to compose them
/// into a timestamp.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GattDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl GattDateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Split a timestamp into its calendar fields.
    ///
    /// Fails with [`Error::EncodingFailed`] for years outside `0..=65535`.
    pub fn from_date_time(timestamp: &DateTime<Utc>) -> Result<Self, Error> {
        let narrow = |v: u32| u8::try_from(v).map_err(|_| Error::EncodingFailed);
        let year = u16::try_from(timestamp.year()).map_err(|_| {
            warn!("[date-time] year {} does not fit the GATT layout", timestamp.year());
            Error::EncodingFailed
        })?;
        Ok(Self {
            year,
            month: narrow(timestamp.month())?,
            day: narrow(timestamp.day())?,
            hour: narrow(timestamp.hour())?,
            minute: narrow(timestamp.minute())?,
            second: narrow(timestamp.second())?,
        })
    }

    /// Compose the fields into a UTC timestamp, `None` if they do not name a real instant.
    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .single()
    }
}

impl TryFrom<&DateTime<Utc>> for GattDateTime {
    type Error = Error;

    fn try_from(timestamp: &DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::from_date_time(timestamp)
    }
}

impl FixedSize for GattDateTime {
    const SIZE: usize = GATT_DATE_TIME_SIZE;
}

impl Encode for GattDateTime {
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
        let dest = dest.get_mut(..Self::SIZE).ok_or(Error::InsufficientSpace)?;
        let mut w = WriteCursor::new(dest);
        w.write(self.year)?;
        w.write(self.month)?;
        w.write(self.day)?;
        w.write(self.hour)?;
        w.write(self.minute)?;
        w.write(self.second)?;
        Ok(())
    }
}

impl Decode<'_> for GattDateTime {
    fn decode(src: &[u8]) -> Result<Self, Error> {
        if src.len() < Self::SIZE {
            return Err(Error::InsufficientSpace);
        }
        let mut r = ReadCursor::new(src);
        let mut field = || r.read::<u8>().ok_or(Error::InsufficientSpace);
        let year = u16::from_le_bytes([field()?, field()?]);
        Ok(Self {
            year,
            month: field()?,
            day: field()?,
            hour: field()?,
            minute: field()?,
            second: field()?,
        })
    }
}

impl FixedSize for DateTime<Utc> {
    const SIZE: usize = GATT_DATE_TIME_SIZE;
}

impl Encode for DateTime<Utc> {
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
        GattDateTime::from_date_time(self)?.encode(dest)
    }
}

impl Decode<'_> for DateTime<Utc> {
    fn decode(src: &[u8]) -> Result<Self, Error> {
        let raw = GattDateTime::decode(src)?;
        raw.to_date_time().ok_or_else(|| {
            debug!(
                "[date-time] {}-{}-{} {}:{}:{} is not a valid date",
                raw.year,
                raw.month,
                raw.day,
                raw.hour,
                raw.minute,
                raw.second
            );
            Error::InvalidValue
        })
    }
}
