pub mod error;
pub mod extractors;
pub mod grid;
pub mod loaders;
pub mod types;

pub use error::WorkbookError;
pub use grid::{Grid, MemoryWorkbook};
pub use loaders::xlsx::XlsxWorkbook;
pub use types::{Cell, Sheet, Workbook};
