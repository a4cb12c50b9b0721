//! Registry-ready style setups
//!
//! A setup is a normalized wrapper around one style facet, used purely as
//! an interning key: two setups with equal underlying fields are the same
//! registry entry regardless of where they were built.

use tabreel_core::{BorderStyle, FillStyle, FontStyle};

/// Interning key for a fill entry of the stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FillSetup(pub FillStyle);

/// Interning key for a font entry of the stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSetup(pub FontStyle);

/// Interning key for a border entry of the stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderSetup(pub BorderStyle);

/// Interning key for a custom numbering format (an xlsx format code)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberingFormatSetup {
    /// Format code, e.g. `"dd/mm/yyyy hh:mm"` or `"0.00%"`
    pub code: String,
}

impl NumberingFormatSetup {
    /// Create a setup for the given format code
    pub fn new<S: Into<String>>(code: S) -> Self {
        Self { code: code.into() }
    }
}

/// One concrete cell appearance: the combination of up to four component
/// setups, each referenced by its registry index
///
/// A `FormatSetup` is only built after its present components have been
/// registered, so the indices here are always valid. An absent component
/// falls back to the baseline entry (index 0) when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatSetup {
    /// Fill registry index
    pub fill: Option<u32>,
    /// Font registry index
    pub font: Option<u32>,
    /// Border registry index
    pub border: Option<u32>,
    /// Numbering-format registry index
    pub numbering_format: Option<u32>,
}

impl FormatSetup {
    /// Check if no component is referenced
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.font.is_none()
            && self.border.is_none()
            && self.numbering_format.is_none()
    }
}
