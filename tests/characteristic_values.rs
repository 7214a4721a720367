use chrono::{DateTime, TimeZone, Utc};
use heapless::String;
use trouble_gatt_codec::{encode, EncodedValue, FromGatt, GattDateTime, ReadCursor, TextEncoding, WriteCursor};

/// A record whose layout gained a trailing user index in version 2.
#[derive(Debug, PartialEq)]
struct WeightMeasurement {
    weight: u16,
    timestamp: Option<DateTime<Utc>>,
    user: Option<u8>,
}

impl FromGatt for WeightMeasurement {
    fn from_gatt(data: &[u8], version: Option<u8>) -> Option<Self> {
        let mut r = ReadCursor::new(data);
        let weight = r.read()?;
        let timestamp = r.read_date_time();
        let user = match version {
            Some(v) if v >= 2 => Some(r.read()?),
            _ => None,
        };
        Some(Self { weight, timestamp, user })
    }
}

fn measurement_bytes(weight: u16, date: &[u8], user: Option<u8>) -> EncodedValue<16> {
    let mut buf = [0u8; 16];
    let mut w = WriteCursor::new(&mut buf);
    w.write(weight).unwrap();
    w.append(date).unwrap();
    if let Some(user) = user {
        w.write(user).unwrap();
    }
    heapless::Vec::from_slice(w.finish()).unwrap()
}

#[test]
fn integer_round_trips() {
    let _ = env_logger::try_init();
    for v in [0u8, 1, 0x7f, 0xff] {
        let bytes: EncodedValue<8> = encode(&v).unwrap();
        assert_eq!(ReadCursor::new(&bytes).read::<u8>(), Some(v));
    }
    for v in [0u16, 0x0102, 0xffff] {
        let bytes: EncodedValue<8> = encode(&v).unwrap();
        assert_eq!(ReadCursor::new(&bytes).read::<u16>(), Some(v));
    }
    for v in [i16::MIN, -1, 0, i16::MAX] {
        let bytes: EncodedValue<8> = encode(&v).unwrap();
        assert_eq!(ReadCursor::new(&bytes).read::<i16>(), Some(v));
    }
    for v in [0u32, 1, 0xdead_beef, u32::MAX] {
        let bytes: EncodedValue<8> = encode(&v).unwrap();
        assert_eq!(ReadCursor::new(&bytes).read::<u32>(), Some(v));
    }
    for v in [0u64, 1, 0x0102_0304_0506_0708, u64::MAX] {
        let bytes: EncodedValue<8> = encode(&v).unwrap();
        assert_eq!(ReadCursor::new(&bytes).read::<u64>(), Some(v));
    }
}

#[test]
fn date_time_round_trip() {
    let _ = env_logger::try_init();
    let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
    let bytes: EncodedValue<7> = encode(&ts).unwrap();
    assert_eq!(&bytes[..], &[0xe4, 0x07, 0x01, 0x02, 0x03, 0x04, 0x05]);

    let mut r = ReadCursor::new(&bytes);
    let decoded = r.read_date_time().unwrap();
    assert_eq!(decoded, ts);
    assert_eq!(r.position(), 7);
    assert_eq!(
        GattDateTime::from_date_time(&decoded),
        Ok(GattDateTime::new(2020, 1, 2, 3, 4, 5))
    );
}

#[test]
fn short_date_time_is_not_consumed() {
    let _ = env_logger::try_init();
    let data = [0xe4, 0x07, 0x01, 0x02, 0x03, 0x04];
    let mut r = ReadCursor::new(&data);
    assert_eq!(r.read_date_time(), None);
    assert_eq!(r.position(), 0);
    assert_eq!(r.read::<u16>(), Some(2020));
}

#[test]
fn invalid_date_time_is_still_consumed() {
    let _ = env_logger::try_init();
    // month 13, followed by one more byte
    let data = [0xe4, 0x07, 0x0d, 0x02, 0x03, 0x04, 0x05, 0x2a];
    let mut r = ReadCursor::new(&data);
    assert_eq!(r.read_date_time(), None);
    assert_eq!(r.position(), 7);
    assert_eq!(r.read::<u8>(), Some(0x2a));

    // The raw fields are still available without calendar validation.
    let mut r = ReadCursor::new(&data);
    assert_eq!(r.read::<GattDateTime>(), Some(GattDateTime::new(2020, 13, 2, 3, 4, 5)));
}

#[test]
fn invalid_text_is_still_consumed() {
    let _ = env_logger::try_init();
    let data = [0xff, 0xfe, 0x05];
    let mut r = ReadCursor::new(&data);
    assert_eq!(r.read_str(Some(2)), None);
    assert_eq!(r.position(), 2);
    assert_eq!(r.read::<u8>(), Some(5));

    let mut r = ReadCursor::new(&data[..1]);
    assert_eq!(r.read_str(None), None);
    assert!(r.is_empty());
}

#[test]
fn text_fields_in_sequence() {
    let _ = env_logger::try_init();
    let mut buf = [0u8; 32];
    let mut w = WriteCursor::new(&mut buf);
    w.write(3u8).unwrap();
    w.write_ref("abc").unwrap();
    w.write_ref("trailer").unwrap();
    let data = w.finish();

    let mut r = ReadCursor::new(data);
    let len = r.read::<u8>().unwrap();
    assert_eq!(r.read_str(Some(len as usize)), Some("abc"));
    let rest: String<16> = r.read_text(None, TextEncoding::Ascii).unwrap();
    assert_eq!(rest.as_str(), "trailer");
    assert_eq!(r.read_str(Some(0)), Some(""));
}

#[test]
fn versioned_record() {
    let _ = env_logger::try_init();
    let date = [0xe4, 0x07, 0x01, 0x02, 0x03, 0x04, 0x05];
    let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();

    let v1 = measurement_bytes(7200, &date, None);
    assert_eq!(
        WeightMeasurement::from_gatt(&v1, None),
        Some(WeightMeasurement {
            weight: 7200,
            timestamp: Some(ts),
            user: None
        })
    );
    // version 2 requires the user index
    assert_eq!(WeightMeasurement::from_gatt(&v1, Some(2)), None);

    let v2 = measurement_bytes(7200, &date, Some(4));
    assert_eq!(
        WeightMeasurement::from_gatt(&v2, Some(2)),
        Some(WeightMeasurement {
            weight: 7200,
            timestamp: Some(ts),
            user: Some(4)
        })
    );
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let _ = env_logger::try_init();
    // Only the weight made it; the timestamp is truncated.
    let data = [0x20, 0x1c, 0xe4, 0x07];
    let mut r = ReadCursor::new(&data);
    let weight = r.read::<u16>().unwrap_or_default();
    let timestamp = r.read_date_time().unwrap_or_default();
    let flags = r.read::<u8>().unwrap_or(0xff);
    assert_eq!(weight, 7200);
    assert_eq!(timestamp, DateTime::<Utc>::default());
    assert_eq!(flags, 0xe4);
    assert_eq!(r.position(), 3);
}

#[test]
fn buffers_can_be_read_by_independent_cursors() {
    let _ = env_logger::try_init();
    let data = [0x01, 0x02, 0x03, 0x04];
    let mut a = ReadCursor::new(&data);
    let mut b = a.clone();
    assert_eq!(a.read::<u32>(), Some(0x0403_0201));
    assert_eq!(b.read::<u16>(), Some(0x0201));
    assert_eq!(b.read::<u16>(), Some(0x0403));
    assert_eq!(a.position(), b.position());

    let handles: std::vec::Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut r = ReadCursor::with_position(&data, i).unwrap();
                r.read::<u8>()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), Some(data[i]));
    }
}
