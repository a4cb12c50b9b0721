//! # tabreel-xlsx
//!
//! Xlsx rendering backend for tabreel tables.
//!
//! Takes a [`TabularSheet`](tabreel_core::TabularSheet), interns every
//! style and string it uses into deduplicated registries, assembles the
//! addressed row/cell model and packages the result as a standard xlsx
//! zip container.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tabreel_core::TabularSheet;
//! use tabreel_xlsx::XlsxWriter;
//!
//! struct Reading { sensor: String, value: f64 }
//!
//! let mut table = TabularSheet::new("Readings");
//! table.add_column("Sensor", |r: &Reading| Some(r.sensor.clone()));
//! table.add_column("Value", |r: &Reading| Some(r.value));
//! table.push(Reading { sensor: "t0".into(), value: 21.5 });
//!
//! XlsxWriter::write_file(&table, "readings.xlsx")?;
//! # Ok::<(), tabreel_xlsx::XlsxError>(())
//! ```

pub mod encode;
pub mod error;
pub mod registry;
pub mod setup;
pub mod sheet;
pub mod stylesheet;
pub mod writer;

pub use encode::{encode, CellDataKind, EncodedValue};
pub use error::{XlsxError, XlsxResult};
pub use registry::{SetupRegistry, SharedStringRegistry};
pub use setup::{BorderSetup, FillSetup, FontSetup, FormatSetup, NumberingFormatSetup};
pub use sheet::{Sheet, SheetBuilder, SheetCell, SheetRow};
pub use stylesheet::{StylesheetBuilder, FIRST_CUSTOM_NUMFMT_ID};
pub use writer::XlsxWriter;
