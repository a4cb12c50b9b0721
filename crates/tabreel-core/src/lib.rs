//! # tabreel-core
//!
//! Table model and cell styling types for the tabreel spreadsheet export
//! library.
//!
//! This crate provides the fundamental types used throughout tabreel:
//! - [`TabularSheet`] and [`TabularColumn`] - The table definition
//! - [`CellValue`] - Typed cell values (text, numbers, booleans, dates)
//! - [`Style`] - Cell formatting (font, fill, border, numbering pattern)
//!   and its field-wise cascade combination
//! - [`CellRefCursor`] - Sequential A1-style address generation
//!
//! ## Example
//!
//! ```rust
//! use tabreel_core::{Color, Style, TabularSheet};
//!
//! struct Reading { sensor: String, value: f64 }
//!
//! let mut table = TabularSheet::new("Readings");
//! table.add_column("Sensor", |r: &Reading| Some(r.sensor.clone()));
//! table.add_column("Value", |r: &Reading| Some(r.value));
//! table.set_header_style(Style::new().fill_color(Color::rgb(0xDD, 0xEE, 0xFF)));
//! table.push(Reading { sensor: "t0".into(), value: 21.5 });
//! ```

pub mod address;
pub mod column;
pub mod error;
pub mod style;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use address::{column_letters, CellRefCursor};
pub use column::TabularColumn;
pub use error::{Error, Result};
pub use table::{SheetOptions, TabularSheet};
pub use value::CellValue;

// Re-export all style types for convenience
pub use style::{BorderLineStyle, BorderStyle, Color, FillPattern, FillStyle, FontStyle, Style};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;
