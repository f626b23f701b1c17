use std::collections::HashMap;

use crate::error::WorkbookError;
use crate::types::{Cell, Sheet, Workbook};

/// In-memory sheet, mostly for tests and fixtures
#[derive(Debug, Clone, Default)]
pub struct Grid {
    name: String,
    cells: HashMap<(u32, u32), Cell>,
    height: u32,
}

impl Grid {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: HashMap::new(),
            height: 0,
        }
    }

    pub fn set(&mut self, row: u32, col: u32, value: impl Into<Cell>) -> &mut Self {
        let value = value.into();
        if !matches!(value, Cell::Empty) {
            self.height = self.height.max(row);
        }
        self.cells.insert((row, col), value);
        self
    }

    /// Fill consecutive cells of `row` starting at `first_col`
    pub fn row(&mut self, row: u32, first_col: u32, values: Vec<Cell>) -> &mut Self {
        for (offset, value) in values.into_iter().enumerate() {
            self.set(row, first_col + offset as u32, value);
        }
        self
    }
}

impl Sheet for Grid {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells.get(&(row, col)).cloned().unwrap_or(Cell::Empty)
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Workbook made of [`Grid`] sheets
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<Grid>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, grid: Grid) -> &mut Self {
        self.sheets.retain(|g| g.name != grid.name);
        self.sheets.push(grid);
        self
    }
}

impl Workbook for MemoryWorkbook {
    type Sheet = Grid;

    fn sheet(&mut self, name: &str) -> Result<Grid, WorkbookError> {
        self.sheets
            .iter()
            .find(|g| g.name == name)
            .cloned()
            .ok_or_else(|| WorkbookError::MissingSheet(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_height_tracks_last_row() {
        let mut grid = Grid::new("S");
        grid.set(3, 2, "a").set(9, 1, 4.0);
        assert_eq!(grid.height(), 9);
        assert_eq!(grid.cell(3, 2), Cell::from("a"));
        assert_eq!(grid.cell(1, 1), Cell::Empty);
    }

    #[test]
    fn test_missing_sheet() {
        let mut book = MemoryWorkbook::new();
        book.add(Grid::new("DT"));
        assert!(book.sheet("DT").is_ok());
        assert!(matches!(
            book.sheet("Sheet2"),
            Err(WorkbookError::MissingSheet(name)) if name == "Sheet2"
        ));
    }
}
