//! Font style types

use super::Color;

/// Font settings for a cell
///
/// Every field is optional; an unset field means "inherit whatever the
/// lower cascade level or the application default provides".
#[derive(Debug, Clone, Default)]
pub struct FontStyle {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Font color
    pub color: Option<Color>,
}

impl FontStyle {
    /// Create a new font style with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set font color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Check if no field is set
    pub fn is_default(&self) -> bool {
        self == &FontStyle::default()
    }

    /// Field-wise merge; fields set on `over` win over `base`
    pub fn combine(base: &FontStyle, over: &FontStyle) -> FontStyle {
        FontStyle {
            name: over.name.clone().or_else(|| base.name.clone()),
            size: over.size.or(base.size),
            color: over.color.or(base.color),
        }
    }
}

// Size compares and hashes by bit pattern, so equality stays reflexive
// even for a NaN size and a registry never sees a key unequal to itself.
impl PartialEq for FontStyle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size.map(f64::to_bits) == other.size.map(f64::to_bits)
            && self.color == other.color
    }
}

impl Eq for FontStyle {}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.map(f64::to_bits).hash(state);
        self.color.hash(state);
    }
}
