//! Border style types

use super::Color;

/// Border settings for a cell
///
/// Each side carries its own optional line style; a single optional color
/// applies to every drawn side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    /// Left border line
    pub left: Option<BorderLineStyle>,
    /// Right border line
    pub right: Option<BorderLineStyle>,
    /// Top border line
    pub top: Option<BorderLineStyle>,
    /// Bottom border line
    pub bottom: Option<BorderLineStyle>,
    /// Line color shared by all sides
    pub color: Option<Color>,
}

impl BorderStyle {
    /// Create a new border style with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four sides to the same line style
    pub fn all(style: BorderLineStyle) -> Self {
        Self {
            left: Some(style),
            right: Some(style),
            top: Some(style),
            bottom: Some(style),
            color: None,
        }
    }

    /// Set all four sides to the same line style, keeping other fields
    pub fn set_all(&mut self, style: Option<BorderLineStyle>) {
        self.left = style;
        self.right = style;
        self.top = style;
        self.bottom = style;
    }

    /// Set the border color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Check if no field is set
    pub fn is_default(&self) -> bool {
        self == &BorderStyle::default()
    }

    /// Field-wise merge; fields set on `over` win over `base`
    pub fn combine(base: &BorderStyle, over: &BorderStyle) -> BorderStyle {
        BorderStyle {
            left: over.left.or(base.left),
            right: over.right.or(base.right),
            top: over.top.or(base.top),
            bottom: over.bottom.or(base.bottom),
            color: over.color.or(base.color),
        }
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLineStyle {
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hairline
    Hair,
}

impl BorderLineStyle {
    /// OOXML border `style` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderLineStyle::Thin => "thin",
            BorderLineStyle::Medium => "medium",
            BorderLineStyle::Thick => "thick",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::Double => "double",
            BorderLineStyle::Hair => "hair",
        }
    }
}
