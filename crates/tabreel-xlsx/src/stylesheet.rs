//! Stylesheet registries and styles.xml rendering

use log::debug;
use tabreel_core::{BorderLineStyle, BorderStyle, FillPattern, FillStyle, FontStyle};

use crate::registry::SetupRegistry;
use crate::setup::{BorderSetup, FillSetup, FontSetup, FormatSetup, NumberingFormatSetup};

/// First id available for custom numbering formats; ids below this are
/// reserved for the builtin Excel formats.
pub const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

/// Collects every style resource a sheet build registers and renders the
/// final `xl/styles.xml` part
///
/// A fresh builder is seeded with the baseline entries Excel viewers
/// require before any table-driven setup, so index 0 of each registry is
/// always valid even for an unstyled table:
/// - fills: "none" (0) and the gray125 hatch (1)
/// - borders: the empty border (0)
/// - numbering formats: "General" (0)
/// - fonts: the default font (0)
/// - formats: the default format wiring the above together (0)
#[derive(Debug)]
pub struct StylesheetBuilder {
    fills: SetupRegistry<FillSetup>,
    fonts: SetupRegistry<FontSetup>,
    borders: SetupRegistry<BorderSetup>,
    numbering_formats: SetupRegistry<NumberingFormatSetup>,
    formats: SetupRegistry<FormatSetup>,
}

impl StylesheetBuilder {
    /// Create a builder seeded with the Excel baseline entries
    pub fn new() -> Self {
        let mut builder = Self {
            fills: SetupRegistry::new(),
            fonts: SetupRegistry::new(),
            borders: SetupRegistry::new(),
            numbering_formats: SetupRegistry::new(),
            formats: SetupRegistry::new(),
        };

        // Excel requires the first two fills to be none and gray125
        builder.fills.register(FillSetup(
            FillStyle::new().with_pattern(FillPattern::None),
        ));
        builder.fills.register(FillSetup(
            FillStyle::new().with_pattern(FillPattern::Gray125),
        ));

        builder.borders.register(BorderSetup(BorderStyle::default()));

        builder
            .numbering_formats
            .register(NumberingFormatSetup::new("General"));

        builder.fonts.register(FontSetup(
            FontStyle::new().with_name("Calibri").with_size(11.0),
        ));

        // cellXfs index 0: the default format every unstyled cell points at
        builder.formats.register(FormatSetup {
            fill: Some(0),
            font: Some(0),
            border: Some(0),
            numbering_format: None,
        });

        builder
    }

    /// Register a cell format built from the given component setups
    ///
    /// Present components are interned first; the resulting [`FormatSetup`]
    /// referencing their indices is then interned itself. Repeated calls
    /// with structurally equal setups return the same format index.
    pub fn register_format(
        &mut self,
        fill: Option<FillSetup>,
        font: Option<FontSetup>,
        border: Option<BorderSetup>,
        numbering_format: Option<NumberingFormatSetup>,
    ) -> u32 {
        let format = FormatSetup {
            fill: fill.map(|f| self.fills.register(f)),
            font: font.map(|f| self.fonts.register(f)),
            border: border.map(|b| self.borders.register(b)),
            numbering_format: numbering_format.map(|n| self.numbering_formats.register(n)),
        };
        self.formats.register(format)
    }

    /// Registered fills, in index order
    pub fn fills(&self) -> &[FillSetup] {
        self.fills.entries()
    }

    /// Registered fonts, in index order
    pub fn fonts(&self) -> &[FontSetup] {
        self.fonts.entries()
    }

    /// Registered borders, in index order
    pub fn borders(&self) -> &[BorderSetup] {
        self.borders.entries()
    }

    /// Registered numbering formats, in index order
    pub fn numbering_formats(&self) -> &[NumberingFormatSetup] {
        self.numbering_formats.entries()
    }

    /// Registered cell formats, in index order
    pub fn formats(&self) -> &[FormatSetup] {
        self.formats.entries()
    }

    /// The `numFmtId` a numbering-format registry index serializes as
    fn numfmt_id(index: u32) -> u32 {
        FIRST_CUSTOM_NUMFMT_ID + index
    }

    /// Render the complete `xl/styles.xml` part
    pub fn to_styles_xml(&self) -> String {
        debug!(
            "rendering stylesheet: {} fills, {} fonts, {} borders, {} numFmts, {} formats",
            self.fills.len(),
            self.fonts.len(),
            self.borders.len(),
            self.numbering_formats.len(),
            self.formats.len()
        );

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        // Custom numbering formats
        xml.push_str(&format!(
            "\n  <numFmts count=\"{}\">",
            self.numbering_formats.len()
        ));
        for (idx, numfmt) in self.numbering_formats.iter() {
            xml.push_str(&format!(
                "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                Self::numfmt_id(idx),
                escape_xml_attr(&numfmt.code)
            ));
        }
        xml.push_str("\n  </numFmts>");

        // Fonts
        xml.push_str(&format!("\n  <fonts count=\"{}\">", self.fonts.len()));
        for font in self.fonts.entries() {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        // Fills
        xml.push_str(&format!("\n  <fills count=\"{}\">", self.fills.len()));
        for fill in self.fills.entries() {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("\n  </fills>");

        // Borders
        xml.push_str(&format!("\n  <borders count=\"{}\">", self.borders.len()));
        for border in self.borders.entries() {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        // cellStyleXfs (required)
        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        // cellXfs
        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.formats.len()));
        for format in self.formats.entries() {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(format));
        }
        xml.push_str("\n  </cellXfs>");

        // cellStyles (required)
        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#,
        );

        xml.push_str("\n</styleSheet>");
        xml
    }
}

impl Default for StylesheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn escape_xml_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn write_font(font: &FontSetup) -> String {
    let font = &font.0;
    let mut s = String::from("<font>");
    if let Some(size) = font.size {
        s.push_str(&format!("<sz val=\"{}\"/>", size));
    }
    if let Some(color) = font.color {
        s.push_str(&format!("<color rgb=\"{}\"/>", color.to_argb_hex()));
    }
    if let Some(name) = &font.name {
        s.push_str(&format!("<name val=\"{}\"/>", escape_xml_attr(name)));
    }
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillSetup) -> String {
    let fill = &fill.0;
    match fill.effective_pattern() {
        FillPattern::Solid => {
            let fg = fill
                .background_color
                .map(|c| format!("<fgColor rgb=\"{}\"/>", c.to_argb_hex()))
                .unwrap_or_default();
            format!(
                "<fill><patternFill patternType=\"solid\">{}<bgColor indexed=\"64\"/></patternFill></fill>",
                fg
            )
        }
        pattern => format!(
            "<fill><patternFill patternType=\"{}\"/></fill>",
            pattern.as_str()
        ),
    }
}

fn write_border_side(tag: &str, side: Option<BorderLineStyle>, border: &BorderStyle) -> String {
    match side {
        None => format!("<{tag}/>"),
        Some(line) => {
            let color = match border.color {
                Some(c) => format!("<color rgb=\"{}\"/>", c.to_argb_hex()),
                None => "<color indexed=\"64\"/>".to_string(),
            };
            format!("<{tag} style=\"{}\">{}</{tag}>", line.as_str(), color)
        }
    }
}

fn write_border(border: &BorderSetup) -> String {
    let border = &border.0;
    let mut s = String::from("<border>");
    s.push_str(&write_border_side("left", border.left, border));
    s.push_str(&write_border_side("right", border.right, border));
    s.push_str(&write_border_side("top", border.top, border));
    s.push_str(&write_border_side("bottom", border.bottom, border));
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn write_xf(format: &FormatSetup) -> String {
    let num_fmt_id = format
        .numbering_format
        .map(StylesheetBuilder::numfmt_id)
        .unwrap_or(0);

    let mut attrs = String::new();
    if format.numbering_format.is_some() {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if format.font.is_some() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if format.fill.is_some() {
        attrs.push_str(" applyFill=\"1\"");
    }
    if format.border.is_some() {
        attrs.push_str(" applyBorder=\"1\"");
    }

    format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}/>",
        num_fmt_id,
        format.font.unwrap_or(0),
        format.fill.unwrap_or(0),
        format.border.unwrap_or(0),
        attrs
    )
}
