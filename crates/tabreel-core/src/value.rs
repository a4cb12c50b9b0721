//! Cell value types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// A typed value extracted from an item for one cell
///
/// The variant is decided once, at the extraction boundary, so downstream
/// encoding pattern-matches a closed set instead of sniffing runtime types.
/// Anything outside the supported kinds goes through [`CellValue::other`],
/// which renders the value to text up front.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Date with time-of-day
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Fallback conversion for types without a dedicated variant: the
    /// value's `Display` form becomes a text cell. Generation stays total
    /// for unexpected types.
    pub fn other<D: fmt::Display>(value: D) -> Self {
        CellValue::Text(value.to_string())
    }

    /// Check if this value carries a date/time
    pub fn is_datetime(&self) -> bool {
        matches!(self, CellValue::DateTime(_))
    }

    /// Get the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Bool(_) => "bool",
            CellValue::DateTime(_) => "datetime",
        }
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(v as f64)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(v: NaiveDateTime) -> Self {
        CellValue::DateTime(v)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::DateTime(v.and_time(chrono::NaiveTime::MIN))
    }
}
