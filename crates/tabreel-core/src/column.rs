//! Table column definitions

use std::fmt;

use crate::error::Result;
use crate::style::Style;
use crate::value::CellValue;

/// Value-extraction function of a column
pub type Extractor<T> = Box<dyn Fn(&T) -> Result<Option<CellValue>> + Send + Sync>;

/// One column of a [`TabularSheet`](crate::TabularSheet)
///
/// A column is a title, a value-extraction function from item to optional
/// typed value, and an optional style override applied over the table's
/// body style. Columns are owned exclusively by their table.
pub struct TabularColumn<T> {
    title: String,
    extractor: Extractor<T>,
    style: Style,
}

impl<T> TabularColumn<T> {
    /// Create a column whose extractor cannot fail
    ///
    /// The extractor returns `None` for items that have no value in this
    /// column; the generated cell stays empty but keeps its address slot.
    pub fn new<S, F, V>(title: S, extract: F) -> Self
    where
        S: Into<String>,
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self {
            title: title.into(),
            extractor: Box::new(move |item| Ok(extract(item).map(Into::into))),
            style: Style::default(),
        }
    }

    /// Create a column whose extractor may fail with a domain error
    ///
    /// An `Err` for any item aborts the whole sheet build; partial or
    /// misaligned sheets are never produced.
    pub fn fallible<S, F>(title: S, extract: F) -> Self
    where
        S: Into<String>,
        F: Fn(&T) -> Result<Option<CellValue>> + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            extractor: Box::new(extract),
            style: Style::default(),
        }
    }

    /// Column title, used as the header cell text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Style override combined over the table's body style
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the column style
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    /// Run the extractor against one item
    pub fn apply(&self, item: &T) -> Result<Option<CellValue>> {
        (self.extractor)(item)
    }
}

impl<T> fmt::Debug for TabularColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabularColumn")
            .field("title", &self.title)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
