//! Column accounting for tab-aware source positions.
//!
//! The lexer reports error positions in 1-based columns, and a tab advances
//! to the next tab stop rather than by one column. How wide a tab stop is
//! comes from the `tab_size` setting, so the same source position lands on
//! different columns under different configurations.

/// First column of the tab stop following `column`.
///
/// Columns are 1-based; an out-of-range `column` of 0 is treated as
/// column 1. `tab_size` must be at least 1 (the registry guarantees this
/// for configured values).
///
/// # Example
///
/// ```rust
/// use veneer::util::next_tab_stop;
///
/// // A tab at column 3 jumps to column 9 with 8-column tabs...
/// assert_eq!(next_tab_stop(3, 8), 9);
/// // ...and only to column 4 with 1-column tabs.
/// assert_eq!(next_tab_stop(3, 1), 4);
/// ```
pub fn next_tab_stop(column: u32, tab_size: u32) -> u32 {
    debug_assert!(tab_size >= 1);
    let column = column.max(1);
    ((column - 1) / tab_size + 1) * tab_size + 1
}

/// Tracks the 1-based column of the next character while scanning source
/// text.
#[derive(Debug, Clone)]
pub struct ColumnTracker {
    column: u32,
    tab_size: u32,
}

impl ColumnTracker {
    /// Starts at column 1 with the given tab width.
    pub fn new(tab_size: u32) -> Self {
        Self {
            column: 1,
            tab_size,
        }
    }

    /// Column the next character would occupy.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Consumes one character of source text.
    pub fn advance(&mut self, c: char) {
        match c {
            '\t' => self.column = next_tab_stop(self.column, self.tab_size),
            '\n' => self.column = 1,
            _ => self.column += 1,
        }
    }

    /// Consumes a run of source text.
    pub fn advance_str(&mut self, s: &str) {
        for c in s.chars() {
            self.advance(c);
        }
    }
}
