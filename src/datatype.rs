// used for timestamps and calendar values
use chrono::{DateTime, Utc};
// used to anchor calendar values in a named zone
use chrono_tz::Tz;
// used for decimal numbers
use bigdecimal::BigDecimal;

// used when parsing type names
use std::str::FromStr;
// used to print out readable forms of a data type
use std::fmt;

use crate::binary::{Binary, ByteStream};
use crate::error::RowbindError;

/// Logical column types, with the numeric codes and upper-case names used by
/// repositories when declaring column types out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyType {
    Undefined,
    String,
    Binary,
    Long,
    Double,
    Date,
    Boolean,
    Name,
    Path,
    Reference,
    Decimal,
}

impl PropertyType {
    pub fn code(&self) -> u8 {
        match self {
            PropertyType::Undefined => 0,
            PropertyType::String => 1,
            PropertyType::Binary => 2,
            PropertyType::Long => 3,
            PropertyType::Double => 4,
            PropertyType::Date => 5,
            PropertyType::Boolean => 6,
            PropertyType::Name => 7,
            PropertyType::Path => 8,
            PropertyType::Reference => 9,
            PropertyType::Decimal => 12,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            PropertyType::Undefined => "UNDEFINED",
            PropertyType::String => "STRING",
            PropertyType::Binary => "BINARY",
            PropertyType::Long => "LONG",
            PropertyType::Double => "DOUBLE",
            PropertyType::Date => "DATE",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Name => "NAME",
            PropertyType::Path => "PATH",
            PropertyType::Reference => "REFERENCE",
            PropertyType::Decimal => "DECIMAL",
        }
    }
}
impl FromStr for PropertyType {
    type Err = RowbindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s.to_ascii_uppercase().as_str() {
            "UNDEFINED" => PropertyType::Undefined,
            "STRING" => PropertyType::String,
            "BINARY" => PropertyType::Binary,
            "LONG" => PropertyType::Long,
            "DOUBLE" => PropertyType::Double,
            "DATE" => PropertyType::Date,
            "BOOLEAN" => PropertyType::Boolean,
            "NAME" => PropertyType::Name,
            "PATH" => PropertyType::Path,
            "REFERENCE" => PropertyType::Reference,
            "DECIMAL" => PropertyType::Decimal,
            _ => return Err(RowbindError::Load(format!("Unknown property type: {}", s))),
        };
        Ok(t)
    }
}
impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ------------- Stored Values --------------
/// One non-null cell of a tuple, tagged with the runtime type it was produced as.
#[derive(Debug, Clone)]
pub enum StoredValue {
    Boolean(bool),
    Long(i64),
    Double(f64),
    Decimal(BigDecimal),
    /// An instant, converted to a calendar in the configured zone on access.
    Timestamp(DateTime<Utc>),
    /// An already constructed calendar, handed back as-is.
    Calendar(DateTime<Tz>),
    Binary(Binary),
    /// Raw bytes, wrapped into a [`Binary`] on access.
    Bytes(Vec<u8>),
    Stream(ByteStream),
    String(String),
}

/// One row's worth of raw values in column order; `None` is a null cell.
pub type Tuple = Vec<Option<StoredValue>>;

impl StoredValue {
    /// Builds a timestamp from milliseconds since the epoch, if representable.
    pub fn timestamp_millis(millis: i64) -> Option<StoredValue> {
        DateTime::from_timestamp_millis(millis).map(StoredValue::Timestamp)
    }
    pub fn kind(&self) -> &'static str {
        match self {
            StoredValue::Boolean(_) => "Boolean",
            StoredValue::Long(_) => "Long",
            StoredValue::Double(_) => "Double",
            StoredValue::Decimal(_) => "Decimal",
            StoredValue::Timestamp(_) => "Timestamp",
            StoredValue::Calendar(_) => "Calendar",
            StoredValue::Binary(_) => "Binary",
            StoredValue::Bytes(_) => "Bytes",
            StoredValue::Stream(_) => "Stream",
            StoredValue::String(_) => "String",
        }
    }
    pub fn property_type(&self) -> PropertyType {
        match self {
            StoredValue::Boolean(_) => PropertyType::Boolean,
            StoredValue::Long(_) => PropertyType::Long,
            StoredValue::Double(_) => PropertyType::Double,
            StoredValue::Decimal(_) => PropertyType::Decimal,
            StoredValue::Timestamp(_) | StoredValue::Calendar(_) => PropertyType::Date,
            StoredValue::Binary(_) | StoredValue::Bytes(_) | StoredValue::Stream(_) => {
                PropertyType::Binary
            }
            StoredValue::String(_) => PropertyType::String,
        }
    }
}
impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoredValue::Boolean(b) => write!(f, "{}", b),
            StoredValue::Long(l) => write!(f, "{}", l),
            StoredValue::Double(d) => write!(f, "{:?}", d),
            StoredValue::Decimal(d) => write!(f, "{}", d),
            StoredValue::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%.3f %Z")),
            StoredValue::Calendar(c) => write!(f, "{}", c.format("%Y-%m-%d %H:%M:%S%.3f %Z")),
            StoredValue::Binary(b) => write!(f, "{}", b),
            StoredValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            StoredValue::Stream(_) => write!(f, "<stream>"),
            StoredValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for StoredValue {
    fn from(v: bool) -> Self { StoredValue::Boolean(v) }
}
impl From<i64> for StoredValue {
    fn from(v: i64) -> Self { StoredValue::Long(v) }
}
impl From<f64> for StoredValue {
    fn from(v: f64) -> Self { StoredValue::Double(v) }
}
impl From<BigDecimal> for StoredValue {
    fn from(v: BigDecimal) -> Self { StoredValue::Decimal(v) }
}
impl From<DateTime<Utc>> for StoredValue {
    fn from(v: DateTime<Utc>) -> Self { StoredValue::Timestamp(v) }
}
impl From<DateTime<Tz>> for StoredValue {
    fn from(v: DateTime<Tz>) -> Self { StoredValue::Calendar(v) }
}
impl From<Binary> for StoredValue {
    fn from(v: Binary) -> Self { StoredValue::Binary(v) }
}
impl From<Vec<u8>> for StoredValue {
    fn from(v: Vec<u8>) -> Self { StoredValue::Bytes(v) }
}
impl From<ByteStream> for StoredValue {
    fn from(v: ByteStream) -> Self { StoredValue::Stream(v) }
}
impl From<String> for StoredValue {
    fn from(v: String) -> Self { StoredValue::String(v) }
}
impl From<&str> for StoredValue {
    fn from(v: &str) -> Self { StoredValue::String(v.to_owned()) }
}
