//! Sheet assembly
//!
//! Walks a [`TabularSheet`] and produces the intermediate [`Sheet`] model:
//! one header row plus one row per item, every cell carrying its A1
//! reference, encoded literal and interned format index. The assembler
//! owns the cell cursor, so rows and columns always come out contiguous
//! and in declaration order.

use log::debug;
use tabreel_core::{CellRefCursor, Error, Result, Style, TabularSheet};

use crate::encode::{encode, CellDataKind};
use crate::registry::SharedStringRegistry;
use crate::setup::{BorderSetup, FillSetup, FontSetup, NumberingFormatSetup};
use crate::stylesheet::StylesheetBuilder;

/// One assembled cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCell {
    /// A1-style reference, e.g. "B3"
    pub reference: String,
    /// Data kind, `None` for an empty cell
    pub kind: Option<CellDataKind>,
    /// Encoded literal, `None` for an empty cell
    pub literal: Option<String>,
    /// Interned cell-format index, `None` when no styling applies
    pub style_index: Option<u32>,
}

/// One assembled row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based worksheet row number
    pub index: u32,
    /// Cells in column order
    pub cells: Vec<SheetCell>,
}

/// The fully assembled sheet, ready for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Header row (always row 1)
    pub header: SheetRow,
    /// Body rows, one per item
    pub rows: Vec<SheetRow>,
    /// Number of columns
    pub column_count: u32,
}

/// Assembles a [`TabularSheet`] into a [`Sheet`] while interning styles
/// and shared strings into the registries it borrows
pub struct SheetBuilder<'a, T> {
    table: &'a TabularSheet<T>,
    styles: &'a mut StylesheetBuilder,
    strings: &'a mut SharedStringRegistry,
    cursor: CellRefCursor,
}

impl<'a, T> SheetBuilder<'a, T> {
    pub fn new(
        table: &'a TabularSheet<T>,
        styles: &'a mut StylesheetBuilder,
        strings: &'a mut SharedStringRegistry,
    ) -> Self {
        Self {
            table,
            styles,
            strings,
            cursor: CellRefCursor::new(),
        }
    }

    /// Assemble the whole sheet
    ///
    /// Validates the column configuration first, then emits the header row
    /// and one body row per item. Any extractor failure aborts the build;
    /// a partially assembled sheet is never returned.
    pub fn build(&mut self) -> Result<Sheet> {
        self.table.validate()?;
        self.cursor.reset();

        let header = self.build_header_row();
        let mut rows = Vec::with_capacity(self.table.items().len());
        for (item_index, item) in self.table.items().iter().enumerate() {
            rows.push(self.build_item_row(item, item_index)?);
        }

        debug!(
            "assembled sheet '{}': {} columns, {} body rows",
            self.table.title(),
            self.table.columns().len(),
            rows.len()
        );

        Ok(Sheet {
            header,
            rows,
            column_count: self.table.columns().len() as u32,
        })
    }

    fn build_header_row(&mut self) -> SheetRow {
        let style = if self.table.options().inherit_header_style_from_body {
            Style::combine(self.table.body_style(), self.table.header_style())
        } else {
            self.table.header_style().clone()
        };
        let style_index = self.register_style(&style, false);

        // The freshly reset cursor already sits on the first row
        let mut cells = Vec::with_capacity(self.table.columns().len());
        for column in self.table.columns() {
            let reference = self.cursor.next_col();
            let string_index = self.strings.register(column.title());
            cells.push(SheetCell {
                reference,
                kind: Some(CellDataKind::SharedString),
                literal: Some(string_index.to_string()),
                style_index,
            });
        }

        SheetRow {
            index: self.cursor.current_row() + 1,
            cells,
        }
    }

    fn build_item_row(&mut self, item: &T, item_index: usize) -> Result<SheetRow> {
        self.cursor.next_row();
        let mut cells = Vec::with_capacity(self.table.columns().len());

        for column in self.table.columns() {
            let reference = self.cursor.next_col();
            let value = column.apply(item).map_err(|e| Error::Extraction {
                column: column.title().to_string(),
                item: item_index,
                message: e.to_string(),
            })?;

            let cell = match value {
                Some(value) => {
                    let style =
                        Style::combine(self.table.body_style(), column.style());
                    let style_index = self.register_style(&style, value.is_datetime());
                    let encoded = encode(&value, self.strings);
                    SheetCell {
                        reference,
                        kind: Some(encoded.kind),
                        literal: Some(encoded.literal),
                        style_index,
                    }
                }
                // Empty cells keep their address slot but carry no data
                // and no format
                None => SheetCell {
                    reference,
                    kind: None,
                    literal: None,
                    style_index: None,
                },
            };
            cells.push(cell);
        }

        Ok(SheetRow {
            index: self.cursor.current_row() + 1,
            cells,
        })
    }

    /// Intern the setups a combined style needs and return the resulting
    /// format index, or `None` when the style contributes nothing
    ///
    /// Date/time cells whose style sets no numbering pattern fall back to
    /// the table's date/time format, so serial dates always render as
    /// dates.
    fn register_style(&mut self, style: &Style, is_datetime: bool) -> Option<u32> {
        let fill = (!style.fill.is_default()).then(|| FillSetup(style.fill.clone()));
        let font = (!style.font.is_default()).then(|| FontSetup(style.font.clone()));
        let border = (!style.border.is_default()).then(|| BorderSetup(style.border.clone()));

        let pattern = style
            .numbering_pattern
            .as_deref()
            .filter(|p| !p.trim().is_empty());
        let numbering = match pattern {
            Some(p) => Some(NumberingFormatSetup::new(p)),
            None if is_datetime => {
                Some(NumberingFormatSetup::new(&self.table.options().date_time_format))
            }
            None => None,
        };

        if fill.is_none() && font.is_none() && border.is_none() && numbering.is_none() {
            return None;
        }
        Some(self.styles.register_format(fill, font, border, numbering))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tabreel_core::{CellValue, Color};

    struct Product {
        name: String,
        price: Option<f64>,
        added: chrono::NaiveDateTime,
    }

    fn sample_items() -> Vec<Product> {
        let date = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_time(chrono::NaiveTime::MIN)
        };
        vec![
            Product {
                name: "Anvil".into(),
                price: Some(99.5),
                added: date(2023, 5, 1),
            },
            Product {
                name: "Rocket skates".into(),
                price: None,
                added: date(2023, 6, 15),
            },
        ]
    }

    fn sample_table() -> TabularSheet<Product> {
        let mut table = TabularSheet::new("Products");
        table.add_column("Name", |p: &Product| Some(p.name.clone()));
        table.add_column("Price", |p: &Product| p.price);
        table.add_column("Added", |p: &Product| Some(p.added));
        table.extend(sample_items());
        table
    }

    fn build<T>(table: &TabularSheet<T>) -> (Sheet, StylesheetBuilder, SharedStringRegistry) {
        let mut styles = StylesheetBuilder::new();
        let mut strings = SharedStringRegistry::new();
        let sheet = SheetBuilder::new(table, &mut styles, &mut strings)
            .build()
            .unwrap();
        (sheet, styles, strings)
    }

    #[test]
    fn test_header_row_contains_titles() {
        let table = sample_table();
        let (sheet, _, strings) = build(&table);

        assert_eq!(sheet.header.index, 1);
        let refs: Vec<&str> = sheet
            .header
            .cells
            .iter()
            .map(|c| c.reference.as_str())
            .collect();
        assert_eq!(refs, vec!["A1", "B1", "C1"]);
        assert_eq!(strings.strings()[0], "Name");
        assert_eq!(strings.strings()[1], "Price");
        assert_eq!(strings.strings()[2], "Added");
    }

    #[test]
    fn test_row_index_matches_cell_references() {
        let table = sample_table();
        let (sheet, _, _) = build(&table);

        // The worksheet row number and the digits inside each cell
        // reference must agree, for the header and every body row
        let rows = std::iter::once(&sheet.header).chain(&sheet.rows);
        for (position, row) in rows.enumerate() {
            assert_eq!(row.index, position as u32 + 1);
            for cell in &row.cells {
                let digits: String = cell
                    .reference
                    .chars()
                    .filter(char::is_ascii_digit)
                    .collect();
                assert_eq!(digits, row.index.to_string(), "in {}", cell.reference);
            }
        }
    }

    #[test]
    fn test_empty_value_keeps_address_slot() {
        let table = sample_table();
        let (sheet, _, _) = build(&table);

        // Second item has no price; its row still has three cells and the
        // date lands in C, not B
        let row = &sheet.rows[1];
        assert_eq!(row.index, 3);
        assert_eq!(row.cells.len(), 3);
        assert_eq!(row.cells[1].reference, "B3");
        assert_eq!(row.cells[1].kind, None);
        assert_eq!(row.cells[1].literal, None);
        assert_eq!(row.cells[1].style_index, None);
        assert_eq!(row.cells[2].reference, "C3");
        assert_eq!(row.cells[2].kind, Some(CellDataKind::Number));
    }

    #[test]
    fn test_unstyled_cells_get_no_format() {
        let table = sample_table();
        let (sheet, styles, _) = build(&table);

        assert_eq!(sheet.header.cells[0].style_index, None);
        assert_eq!(sheet.rows[0].cells[0].style_index, None);
        // Only the date cells forced a format (the date/time fallback), so
        // exactly one custom format exists next to the default
        assert_eq!(styles.formats().len(), 2);
    }

    #[test]
    fn test_datetime_fallback_numbering_format() {
        let table = sample_table();
        let (sheet, styles, _) = build(&table);

        let idx = sheet.rows[0].cells[2].style_index.unwrap();
        let format = styles.formats()[idx as usize];
        let numfmt = format.numbering_format.unwrap();
        assert_eq!(
            styles.numbering_formats()[numfmt as usize].code,
            "dd/mm/yyyy hh:mm"
        );
        // Both rows' date cells share the interned format
        assert_eq!(sheet.rows[1].cells[2].style_index, Some(idx));
    }

    #[test]
    fn test_explicit_pattern_beats_datetime_fallback() {
        let mut table = TabularSheet::new("Dates");
        table.add_column("Added", |p: &Product| Some(p.added));
        table
            .add_column("AddedShort", |p: &Product| Some(p.added))
            .set_style(Style::new().with_numbering_pattern("yyyy-mm"));
        table.extend(sample_items());

        let (sheet, styles, _) = build(&table);
        let short_idx = sheet.rows[0].cells[1].style_index.unwrap();
        let numfmt = styles.formats()[short_idx as usize].numbering_format.unwrap();
        assert_eq!(styles.numbering_formats()[numfmt as usize].code, "yyyy-mm");
    }

    #[test]
    fn test_body_style_cascade_shares_format() {
        let mut table = TabularSheet::new("Styled");
        table.add_column("A", |p: &Product| Some(p.name.clone()));
        table.add_column("B", |p: &Product| Some(p.name.clone()));
        table.set_body_style(Style::new().fill_color(Color::BLUE));
        table.extend(sample_items());

        let (sheet, styles, _) = build(&table);

        // All four body cells share one interned format
        let idx = sheet.rows[0].cells[0].style_index.unwrap();
        for row in &sheet.rows {
            for cell in &row.cells {
                assert_eq!(cell.style_index, Some(idx));
            }
        }
        assert_eq!(styles.formats().len(), 2);
        // Header has no style of its own
        assert_eq!(sheet.header.cells[0].style_index, None);
    }

    #[test]
    fn test_column_style_overrides_body_style() {
        let mut table = TabularSheet::new("Styled");
        table.set_body_style(Style::new().fill_color(Color::BLUE));
        table.add_column("A", |p: &Product| Some(p.name.clone()));
        table
            .add_column("B", |p: &Product| Some(p.name.clone()))
            .set_style(Style::new().fill_color(Color::RED));
        table.extend(sample_items());

        let (sheet, styles, _) = build(&table);

        let a_idx = sheet.rows[0].cells[0].style_index.unwrap();
        let b_idx = sheet.rows[0].cells[1].style_index.unwrap();
        assert_ne!(a_idx, b_idx);

        let a_fill = styles.formats()[a_idx as usize].fill.unwrap();
        let b_fill = styles.formats()[b_idx as usize].fill.unwrap();
        assert_eq!(
            styles.fills()[a_fill as usize].0.background_color,
            Some(Color::BLUE)
        );
        assert_eq!(
            styles.fills()[b_fill as usize].0.background_color,
            Some(Color::RED)
        );
    }

    #[test]
    fn test_header_inherits_body_style_when_enabled() {
        let mut table = TabularSheet::new("Styled");
        table.add_column("A", |p: &Product| Some(p.name.clone()));
        table.set_body_style(Style::new().fill_color(Color::BLUE));
        table.set_header_style(Style::new().with_font(
            tabreel_core::FontStyle::new().with_size(14.0),
        ));
        table.options_mut().inherit_header_style_from_body = true;
        table.extend(sample_items());

        let (sheet, styles, _) = build(&table);

        let idx = sheet.header.cells[0].style_index.unwrap();
        let format = styles.formats()[idx as usize];
        // Fill inherited from the body, font from the header itself
        let fill = format.fill.unwrap();
        assert_eq!(
            styles.fills()[fill as usize].0.background_color,
            Some(Color::BLUE)
        );
        let font = format.font.unwrap();
        assert_eq!(styles.fonts()[font as usize].0.size, Some(14.0));
    }

    #[test]
    fn test_two_column_name_date_scenario() {
        struct Member {
            name: String,
            joined: chrono::NaiveDateTime,
        }

        let joined = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_time(chrono::NaiveTime::MIN)
        };
        let mut table = TabularSheet::new("Members");
        table.add_column("Name", |m: &Member| Some(m.name.clone()));
        table.add_column("Joined", |m: &Member| Some(m.joined));
        table.set_body_style(Style::new().fill_color(Color::BLUE));
        table.push(Member {
            name: "Ada".into(),
            joined: joined(2001, 1, 15),
        });
        table.push(Member {
            name: "Grace".into(),
            joined: joined(2003, 7, 2),
        });

        let (sheet, styles, _) = build(&table);

        // Both header cells share the default header treatment
        assert_eq!(
            sheet.header.cells[0].style_index,
            sheet.header.cells[1].style_index
        );

        // Name cells of both rows share one format, Joined cells another
        // (blue fill plus the date pattern), and both formats point at the
        // same interned blue fill entry
        let name_idx = sheet.rows[0].cells[0].style_index.unwrap();
        assert_eq!(sheet.rows[1].cells[0].style_index, Some(name_idx));
        let date_idx = sheet.rows[0].cells[1].style_index.unwrap();
        assert_eq!(sheet.rows[1].cells[1].style_index, Some(date_idx));
        assert_ne!(name_idx, date_idx);

        let name_format = styles.formats()[name_idx as usize];
        let date_format = styles.formats()[date_idx as usize];
        assert_eq!(name_format.fill, date_format.fill);
        assert_eq!(name_format.numbering_format, None);

        let numfmt = date_format.numbering_format.unwrap();
        assert_eq!(
            styles.numbering_formats()[numfmt as usize].code,
            table.options().date_time_format
        );
    }

    #[test]
    fn test_extraction_error_names_column_and_item() {
        let mut table: TabularSheet<Product> = TabularSheet::new("Errs");
        table.add_fallible_column("Price", |p: &Product| match p.price {
            Some(v) => Ok(Some(CellValue::from(v))),
            None => Err(tabreel_core::Error::other("price missing")),
        });
        table.extend(sample_items());

        let mut styles = StylesheetBuilder::new();
        let mut strings = SharedStringRegistry::new();
        let err = SheetBuilder::new(&table, &mut styles, &mut strings)
            .build()
            .unwrap_err();

        match err {
            Error::Extraction {
                column,
                item,
                message,
            } => {
                assert_eq!(column, "Price");
                assert_eq!(item, 1);
                assert!(message.contains("price missing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
