//! Cell references and the sequential address cursor

/// Convert a 1-based column number to its letter label
///
/// This is bijective base-26 (A=1 .. Z=26, then AA=27): there is no zero
/// digit, so the naive positional conversion is off by one at every digit
/// boundary. The `n -= 1` inside the loop is the correction.
pub fn column_letters(col: u32) -> String {
    debug_assert!(col >= 1, "column numbers are 1-based");
    let mut result = String::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Stateful generator of A1-style cell references
///
/// Strictly sequential and single-pass: a generation run requests addresses
/// in row-major, left-to-right, top-to-bottom order and never reuses one.
#[derive(Debug, Default)]
pub struct CellRefCursor {
    /// Current row (0-based)
    row: u32,
    /// Column consumed so far in the current row (0 = before first cell)
    col: u32,
}

impl CellRefCursor {
    /// Create a cursor positioned at the start of the first row
    pub fn new() -> Self {
        Self::default()
    }

    /// Move back to the start of the first row
    pub fn reset(&mut self) {
        self.row = 0;
        self.reset_col();
    }

    /// Move back to the start of the current row
    pub fn reset_col(&mut self) {
        self.col = 0;
    }

    /// Advance to the next row; the column position resets with it
    pub fn next_row(&mut self) {
        self.row += 1;
        self.reset_col();
    }

    /// Advance one column and return the reference of the cell just entered
    pub fn next_col(&mut self) -> String {
        self.col += 1;
        format!("{}{}", column_letters(self.col), self.row + 1)
    }

    /// Current row (0-based)
    pub fn current_row(&self) -> u32 {
        self.row
    }
}
