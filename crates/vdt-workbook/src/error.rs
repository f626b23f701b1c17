#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("Cannot open workbook {path}")]
    Open {
        path: String,
        source: calamine::Error,
    },

    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    #[error("Cannot read sheet {sheet}")]
    Read {
        sheet: String,
        source: calamine::Error,
    },
}
