//! Tabular sheet definition

use std::collections::HashSet;

use crate::column::TabularColumn;
use crate::error::{Error, Result};
use crate::style::Style;
use crate::value::CellValue;

/// Generation options of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    /// Numbering pattern applied to date/time cells whose style does not
    /// set one. Without it a viewer would show the raw serial number.
    pub date_time_format: String,
    /// Combine the header style over the body style before applying it
    pub inherit_header_style_from_body: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            date_time_format: "dd/mm/yyyy hh:mm".to_string(),
            inherit_header_style_from_body: false,
        }
    }
}

/// An in-memory table of typed records, ready to be rendered as one sheet
///
/// A table owns its column definitions, the item collection, the two
/// cascade-level styles (header and body) and the generation options.
/// Everything is read-only during a generation run; the column set is
/// frozen once row generation begins.
///
/// # Example
///
/// ```rust
/// use tabreel_core::{Color, Style, TabularSheet};
///
/// struct Person { name: String, age: u32 }
///
/// let mut table = TabularSheet::new("People");
/// table.add_column("Name", |p: &Person| Some(p.name.clone()));
/// table.add_column("Age", |p: &Person| Some(p.age));
/// table.set_body_style(Style::new().fill_color(Color::BLUE));
/// table.push(Person { name: "Ada".into(), age: 36 });
/// ```
pub struct TabularSheet<T> {
    title: String,
    columns: Vec<TabularColumn<T>>,
    items: Vec<T>,
    header_style: Style,
    body_style: Style,
    options: SheetOptions,
}

impl<T> TabularSheet<T> {
    /// Create an empty table with the given sheet title
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            items: Vec::new(),
            header_style: Style::default(),
            body_style: Style::default(),
            options: SheetOptions::default(),
        }
    }

    /// Sheet title used for the worksheet name
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add a column with an infallible extractor; returns the column so a
    /// style can be chained onto it
    pub fn add_column<S, F, V>(&mut self, title: S, extract: F) -> &mut TabularColumn<T>
    where
        S: Into<String>,
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        self.columns.push(TabularColumn::new(title, extract));
        self.columns.last_mut().expect("column just pushed")
    }

    /// Add a column whose extractor may fail with a domain error
    pub fn add_fallible_column<S, F>(&mut self, title: S, extract: F) -> &mut TabularColumn<T>
    where
        S: Into<String>,
        F: Fn(&T) -> Result<Option<CellValue>> + Send + Sync + 'static,
    {
        self.columns.push(TabularColumn::fallible(title, extract));
        self.columns.last_mut().expect("column just pushed")
    }

    /// Ordered column definitions
    pub fn columns(&self) -> &[TabularColumn<T>] {
        &self.columns
    }

    /// Append one item
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Append many items
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Item collection, in row order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Style applied to header cells
    pub fn header_style(&self) -> &Style {
        &self.header_style
    }

    /// Replace the header style
    pub fn set_header_style(&mut self, style: Style) {
        self.header_style = style;
    }

    /// Style applied to body cells, under column overrides
    pub fn body_style(&self) -> &Style {
        &self.body_style
    }

    /// Replace the body style
    pub fn set_body_style(&mut self, style: Style) {
        self.body_style = style;
    }

    /// Generation options
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Mutable access to the generation options
    pub fn options_mut(&mut self) -> &mut SheetOptions {
        &mut self.options
    }

    /// Check the column configuration before any generation starts
    ///
    /// Malformed configuration is a construction-time failure, never
    /// discovered mid-assembly.
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::NoColumns);
        }

        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(col.title()) {
                return Err(Error::DuplicateColumnTitle(col.title().to_string()));
            }
        }

        Ok(())
    }
}

impl<T> std::fmt::Debug for TabularSheet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabularSheet")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("items", &self.items.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
        score: f64,
    }

    #[test]
    fn test_validate_ok() {
        let mut table = TabularSheet::new("Scores");
        table.add_column("Name", |i: &Item| Some(i.name.clone()));
        table.add_column("Score", |i: &Item| Some(i.score));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_no_columns() {
        let table: TabularSheet<Item> = TabularSheet::new("Empty");
        assert!(matches!(table.validate(), Err(Error::NoColumns)));
    }

    #[test]
    fn test_validate_duplicate_titles() {
        let mut table = TabularSheet::new("Dup");
        table.add_column("Name", |i: &Item| Some(i.name.clone()));
        table.add_column("Name", |i: &Item| Some(i.score));
        assert!(matches!(
            table.validate(),
            Err(Error::DuplicateColumnTitle(t)) if t == "Name"
        ));
    }

    #[test]
    fn test_extractor_absent_value() {
        let mut table = TabularSheet::new("Sparse");
        table.add_column("Score", |i: &Item| {
            if i.score.is_nan() {
                None
            } else {
                Some(i.score)
            }
        });

        let item = Item {
            name: "x".into(),
            score: f64::NAN,
        };
        let value = table.columns()[0].apply(&item).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_fallible_extractor_propagates() {
        let mut table = TabularSheet::new("Errs");
        table.add_fallible_column("Score", |_: &Item| Err(Error::other("bad record")));

        let item = Item {
            name: "x".into(),
            score: 1.0,
        };
        assert!(table.columns()[0].apply(&item).is_err());
    }
}
