//! Color representation

/// Color used by fonts, fills and borders
///
/// Stored as RGB or ARGB components; styles wrap it in `Option` so an
/// unset color stays distinguishable from an explicit black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    /// Black (#000000)
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// White (#FFFFFF)
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Red (#FF0000)
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Green (#00FF00)
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Blue (#0000FF)
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "FFFF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb { r, g, b })
            }
            8 => {
                let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Color::Argb { a, r, g, b })
            }
            _ => None,
        }
    }

    /// Format as an 8-digit ARGB hex string ("FFRRGGBB" for RGB colors)
    pub fn to_argb_hex(&self) -> String {
        match self {
            Color::Rgb { r, g, b } => format!("FF{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("0000FF"), Some(Color::BLUE));
        assert_eq!(
            Color::from_hex("80FFFFFF"),
            Some(Color::argb(0x80, 255, 255, 255))
        );
        assert_eq!(Color::from_hex("zzz"), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb_hex(), "FF123456");
        assert_eq!(Color::argb(0x01, 0x02, 0x03, 0x04).to_argb_hex(), "01020304");
    }
}
