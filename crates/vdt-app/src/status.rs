use std::path::PathBuf;

/// One written table
#[derive(Clone, Debug)]
pub struct TableReport {
    pub file_name: &'static str,
    pub entries: usize,
    pub path: PathBuf,
}

/// Tables written during this run, logged at the end
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub tables: Vec<TableReport>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a table; a later write of the same file replaces the earlier one
    pub fn record(&mut self, file_name: &'static str, entries: usize, path: PathBuf) {
        self.tables.retain(|t| t.file_name != file_name);
        self.tables.push(TableReport {
            file_name,
            entries,
            path,
        });
    }

    pub fn log(&self) {
        for table in &self.tables {
            tracing::info!(
                "{:<22} {:>5} entries -> {}",
                table.file_name,
                table.entries,
                table.path.display()
            );
        }
        tracing::info!("{} tables written", self.tables.len());
    }
}
