//! Cell styling types
//!
//! This module contains the value objects that describe cell appearance:
//! - [`Style`] - Complete cell style (font + fill + border + numbering)
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Color`] - Color representation
//!
//! All of them implement structural equality: two instances are equal iff
//! every field is equal, including both being unset. Styles are treated as
//! immutable once a generation run starts; mutate-after-register is out of
//! contract.

mod border;
mod color;
mod fill;
mod font;

pub use border::{BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillPattern, FillStyle};
pub use font::FontStyle;

/// Complete cell style
///
/// The default instance is the identity for [`Style::combine`]: combining
/// anything over it (or it over anything) leaves the other side intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: BorderStyle,
    /// Numbering pattern applied to numeric values (xlsx format code)
    pub numbering_pattern: Option<String>,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font
    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    /// Set the fill
    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Set the border
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the numbering pattern
    pub fn with_numbering_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.numbering_pattern = Some(pattern.into());
        self
    }

    /// Solid fill shorthand
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Check if no field of any facet is set
    pub fn is_default(&self) -> bool {
        self == &Style::default()
    }

    /// Merge two styles field-by-field; leaf fields set on `over` win,
    /// unset fields keep the value from `base`.
    ///
    /// This is a flat single-pass merge over the fixed field set, not a
    /// whole-object replace: an `over` with only a font size set combined
    /// over a `base` with only a fill color keeps both.
    pub fn combine(base: &Style, over: &Style) -> Style {
        Style {
            font: FontStyle::combine(&base.font, &over.font),
            fill: FillStyle::combine(&base.fill, &over.fill),
            border: BorderStyle::combine(&base.border, &over.border),
            numbering_pattern: over
                .numbering_pattern
                .clone()
                .or_else(|| base.numbering_pattern.clone()),
        }
    }
}
