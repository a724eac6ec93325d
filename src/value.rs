//! Typed access to a single materialized cell.
//!
//! A [`Value`] is created on demand when a row is asked for a column. It
//! borrows the stored cell and supports exactly one native representation per
//! stored runtime type; asking for any other representation fails with
//! [`RowbindError::ValueFormat`]. The string form is the one coercion that
//! never fails.

use chrono::DateTime;
use chrono_tz::Tz;
use bigdecimal::BigDecimal;

use crate::binary::{Binary, ByteStream};
use crate::datatype::{PropertyType, StoredValue};
use crate::error::{Result, RowbindError};

#[derive(Debug, Clone, Copy)]
pub struct Value<'a> {
    stored: &'a StoredValue,
    zone: Tz,
}

impl<'a> Value<'a> {
    pub fn new(stored: &'a StoredValue, zone: Tz) -> Self {
        Self { stored, zone }
    }
    pub fn stored(&self) -> &'a StoredValue {
        self.stored
    }
    fn mismatch<T>(&self, expected: &'static str) -> Result<T> {
        Err(RowbindError::ValueFormat { expected, found: self.stored.kind() })
    }

    pub fn boolean(&self) -> Result<bool> {
        match self.stored {
            StoredValue::Boolean(b) => Ok(*b),
            _ => self.mismatch("Boolean"),
        }
    }
    pub fn long(&self) -> Result<i64> {
        match self.stored {
            StoredValue::Long(l) => Ok(*l),
            _ => self.mismatch("Long"),
        }
    }
    pub fn double(&self) -> Result<f64> {
        match self.stored {
            StoredValue::Double(d) => Ok(*d),
            _ => self.mismatch("Double"),
        }
    }
    pub fn decimal(&self) -> Result<BigDecimal> {
        match self.stored {
            StoredValue::Decimal(d) => Ok(d.clone()),
            _ => self.mismatch("Decimal"),
        }
    }
    /// Timestamps are rendered as calendars in the configured zone; stored
    /// calendars keep their own zone.
    pub fn date(&self) -> Result<DateTime<Tz>> {
        match self.stored {
            StoredValue::Timestamp(t) => Ok(t.with_timezone(&self.zone)),
            StoredValue::Calendar(c) => Ok(*c),
            _ => self.mismatch("Date"),
        }
    }
    pub fn binary(&self) -> Result<Binary> {
        match self.stored {
            StoredValue::Binary(b) => Ok(b.clone()),
            StoredValue::Bytes(bytes) => Ok(Binary::from(bytes.as_slice())),
            _ => self.mismatch("Binary"),
        }
    }
    pub fn stream(&self) -> Result<ByteStream> {
        match self.stored {
            StoredValue::Binary(b) => Ok(b.stream()),
            StoredValue::Stream(s) => Ok(s.clone()),
            _ => self.mismatch("Stream"),
        }
    }
    pub fn string(&self) -> String {
        match self.stored {
            StoredValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
    /// Always [`PropertyType::String`], whatever is stored. Use
    /// [`Value::stored_type`] for the actual type.
    pub fn type_tag(&self) -> PropertyType {
        PropertyType::String
    }
    pub fn stored_type(&self) -> PropertyType {
        self.stored.property_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;
    use chrono::TimeZone;
    use chrono_tz::Europe::London;

    fn accessor_results(v: &Value) -> [bool; 7] {
        [
            v.boolean().is_ok(),
            v.long().is_ok(),
            v.double().is_ok(),
            v.decimal().is_ok(),
            v.date().is_ok(),
            v.binary().is_ok(),
            v.stream().is_ok(),
        ]
    }

    #[test]
    fn only_the_native_accessor_succeeds() {
        let cases: Vec<(StoredValue, [bool; 7])> = vec![
            (true.into(), [true, false, false, false, false, false, false]),
            (5i64.into(), [false, true, false, false, false, false, false]),
            (2.5f64.into(), [false, false, true, false, false, false, false]),
            (BigDecimal::from_str("1.10").unwrap().into(), [false, false, false, true, false, false, false]),
            (StoredValue::timestamp_millis(0).unwrap(), [false, false, false, false, true, false, false]),
            (b"raw".to_vec().into(), [false, false, false, false, false, true, false]),
            (Binary::from(b"blob".to_vec()).into(), [false, false, false, false, false, true, true]),
            (ByteStream::new(Cursor::new(vec![1u8])).into(), [false, false, false, false, false, false, true]),
            ("text".into(), [false; 7]),
        ];
        for (stored, expected) in &cases {
            let v = Value::new(stored, London);
            assert_eq!(&accessor_results(&v), expected, "accessors for {}", stored.kind());
        }
    }

    #[test]
    fn mismatch_names_both_types() {
        let stored = StoredValue::from(5i64);
        let err = Value::new(&stored, London).boolean().unwrap_err();
        assert!(matches!(err, RowbindError::ValueFormat { expected: "Boolean", found: "Long" }));
    }

    #[test]
    fn string_never_fails() {
        let stored = StoredValue::from(5i64);
        assert_eq!(Value::new(&stored, London).string(), "5");
        let stored = StoredValue::from("r1c1");
        assert_eq!(Value::new(&stored, London).string(), "r1c1");
    }

    #[test]
    fn calendars_are_returned_unchanged() {
        let cal = London.with_ymd_and_hms(2004, 6, 30, 2, 39, 10).unwrap();
        let stored = StoredValue::from(cal);
        let got = Value::new(&stored, chrono_tz::America::Chicago).date().unwrap();
        assert_eq!(got, cal);
        assert_eq!(got.timezone(), London);
    }

    #[test]
    fn bytes_are_wrapped_into_a_binary() {
        let stored = StoredValue::from(b"Heres my data at r1".to_vec());
        let b = Value::new(&stored, London).binary().unwrap();
        assert_eq!(b.size(), 19);
        assert_eq!(b.bytes(), b"Heres my data at r1");
    }

    #[test]
    fn type_tag_is_fixed() {
        let stored = StoredValue::from(5i64);
        let v = Value::new(&stored, London);
        assert_eq!(v.type_tag(), PropertyType::String);
        assert_eq!(v.stored_type(), PropertyType::Long);
    }
}
