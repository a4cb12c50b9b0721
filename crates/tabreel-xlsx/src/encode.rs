//! Cell value encoding
//!
//! Maps a typed [`CellValue`] to the pair an xlsx cell actually stores: a
//! data-kind tag and a literal already converted to that kind's textual
//! representation. Text goes through the shared-string registry; numbers,
//! booleans and dates never do.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tabreel_core::CellValue;

use crate::registry::SharedStringRegistry;

/// Days from 0001-01-01 (chrono's `num_days_from_ce` origin) to the xlsx
/// serial-date epoch 1899-12-30. 1900-01-01 lands on serial 2, matching
/// the OADate convention of the original format.
const EPOCH_DAYS_FROM_CE: i64 = 693_594;

const SECONDS_PER_DAY: i64 = 86_400;

/// The data-kind tag of an encoded cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellDataKind {
    /// Numeric payload (plain numbers and date serials)
    Number,
    /// Index into the shared-string registry
    SharedString,
    /// Boolean payload, "0" or "1"
    Boolean,
}

impl CellDataKind {
    /// The worksheet `t` attribute; `None` for numbers (the default kind)
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            CellDataKind::Number => None,
            CellDataKind::SharedString => Some("s"),
            CellDataKind::Boolean => Some("b"),
        }
    }
}

/// A value converted to its on-disk representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue {
    /// Data-kind tag
    pub kind: CellDataKind,
    /// Literal in the kind's representation (a registry index for text)
    pub literal: String,
}

/// Encode one typed value, interning text into `strings`
pub fn encode(value: &CellValue, strings: &mut SharedStringRegistry) -> EncodedValue {
    match value {
        CellValue::Text(s) => EncodedValue {
            kind: CellDataKind::SharedString,
            literal: strings.register(s).to_string(),
        },
        CellValue::Int(i) => EncodedValue {
            kind: CellDataKind::Number,
            literal: i.to_string(),
        },
        CellValue::Float(f) => EncodedValue {
            kind: CellDataKind::Number,
            literal: float_literal(*f),
        },
        CellValue::Bool(b) => EncodedValue {
            kind: CellDataKind::Boolean,
            literal: if *b { "1" } else { "0" }.to_string(),
        },
        CellValue::DateTime(dt) => EncodedValue {
            kind: CellDataKind::Number,
            literal: serial_literal(dt),
        },
    }
}

/// Fixed-point decimal text for a float literal
///
/// Going through `Decimal` avoids the locale- and precision-dependent
/// drift of printing the raw binary float.
fn float_literal(f: f64) -> String {
    match Decimal::from_f64(f) {
        Some(d) => d.normalize().to_string(),
        // Out of Decimal range (or non-finite): fall back to the shortest
        // round-trip float text
        None => f.to_string(),
    }
}

/// Count of days (including fractional time-of-day) since the epoch
pub fn date_serial(dt: &NaiveDateTime) -> f64 {
    let days = dt.date().num_days_from_ce() as i64 - EPOCH_DAYS_FROM_CE;
    let seconds = dt.time().num_seconds_from_midnight() as i64;
    days as f64 + seconds as f64 / SECONDS_PER_DAY as f64
}

/// Serial-date literal: exact integer text for midnight, fixed-point
/// decimal (10 places) otherwise
fn serial_literal(dt: &NaiveDateTime) -> String {
    let days = dt.date().num_days_from_ce() as i64 - EPOCH_DAYS_FROM_CE;
    let seconds = dt.time().num_seconds_from_midnight() as i64;

    if seconds == 0 {
        return days.to_string();
    }

    let serial =
        Decimal::from(days) + Decimal::from(seconds) / Decimal::from(SECONDS_PER_DAY);
    serial.round_dp(10).normalize().to_string()
}
