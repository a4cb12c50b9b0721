//! Fill/background style types

use super::Color;

/// Fill settings for a cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FillStyle {
    /// Background color; rendered as a solid pattern fill when set
    pub background_color: Option<Color>,
    /// Explicit pattern; `None` means derive it from the color
    pub pattern: Option<FillPattern>,
}

impl FillStyle {
    /// Create a new fill style with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Solid fill with the given background color
    pub fn solid(color: Color) -> Self {
        Self {
            background_color: Some(color),
            pattern: Some(FillPattern::Solid),
        }
    }

    /// Set background color
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set pattern
    pub fn with_pattern(mut self, pattern: FillPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Check if no field is set
    pub fn is_default(&self) -> bool {
        self == &FillStyle::default()
    }

    /// Pattern that will actually be rendered: the explicit one if set,
    /// solid when a color is present, none otherwise.
    pub fn effective_pattern(&self) -> FillPattern {
        match self.pattern {
            Some(p) => p,
            None if self.background_color.is_some() => FillPattern::Solid,
            None => FillPattern::None,
        }
    }

    /// Field-wise merge; fields set on `over` win over `base`
    pub fn combine(base: &FillStyle, over: &FillStyle) -> FillStyle {
        FillStyle {
            background_color: over.background_color.or(base.background_color),
            pattern: over.pattern.or(base.pattern),
        }
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillPattern {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 12.5% gray hatch
    Gray125,
}

impl FillPattern {
    /// OOXML `patternType` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            FillPattern::None => "none",
            FillPattern::Solid => "solid",
            FillPattern::Gray125 => "gray125",
        }
    }
}
