use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

use crate::error::WorkbookError;
use crate::types::{Cell, Sheet, Workbook};

/// Workbook on disk (xlsx, xlsm, xls or ods), read with calamine
pub struct XlsxWorkbook {
    inner: Sheets<BufReader<File>>,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<Self, WorkbookError> {
        tracing::info!("Opening workbook: {}", path.display());
        let inner = open_workbook_auto(path).map_err(|source| WorkbookError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { inner })
    }
}

impl Workbook for XlsxWorkbook {
    type Sheet = RangeSheet;

    fn sheet(&mut self, name: &str) -> Result<RangeSheet, WorkbookError> {
        if !self.inner.sheet_names().iter().any(|n| n == name) {
            return Err(WorkbookError::MissingSheet(name.to_string()));
        }

        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|source| WorkbookError::Read {
                sheet: name.to_string(),
                source,
            })?;
        tracing::debug!("Sheet {} spans {:?}..{:?}", name, range.start(), range.end());

        Ok(RangeSheet {
            name: name.to_string(),
            range,
        })
    }
}

/// One worksheet's cached values
pub struct RangeSheet {
    name: String,
    range: Range<Data>,
}

impl Sheet for RangeSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell(&self, row: u32, col: u32) -> Cell {
        if row == 0 || col == 0 {
            return Cell::Empty;
        }
        // calamine ranges start at the first used cell; absolute lookup is 0-based
        match self.range.get_value((row - 1, col - 1)) {
            Some(data) => to_cell(data),
            None => Cell::Empty,
        }
    }

    fn height(&self) -> u32 {
        self.range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        other => Cell::Text(other.to_string()),
    }
}
