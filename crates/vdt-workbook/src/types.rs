use crate::error::WorkbookError;

/// A single cell value, already detached from the file format
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// No value at all. An empty string counts as missing too.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Empty, zero and `false` are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Number(n) => *n != 0.0,
            Cell::Text(s) => !s.is_empty(),
            Cell::Bool(b) => *b,
        }
    }

    /// Integer value of a numeric cell, truncated toward zero
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Cell::Number(n) => Some(n.trunc() as i64),
            Cell::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Numeric value or 0
    pub fn as_int(&self) -> i64 {
        self.as_number().unwrap_or(0)
    }

    /// Trimmed text, "" for falsy cells. Whole numbers print without ".0".
    pub fn as_text(&self) -> String {
        if !self.is_truthy() {
            return String::new();
        }
        self.to_text()
    }

    /// Trimmed text of any value, zero and `false` included
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Empty => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// Cell access by 1-based row and column, as shown in a spreadsheet UI
pub trait Sheet {
    fn name(&self) -> &str;

    /// `Cell::Empty` outside the used area
    fn cell(&self, row: u32, col: u32) -> Cell;

    /// Last used row, 0 for an empty sheet
    fn height(&self) -> u32;
}

/// Named sheets of one workbook
pub trait Workbook {
    type Sheet: Sheet;

    fn sheet(&mut self, name: &str) -> Result<Self::Sheet, WorkbookError>;
}
