use super::traits::{AlgorithmRepository, LoadReport, PersistenceError};
use crate::core::models::record::AlgorithmRecord;

/// Keeps records in memory; for tests and for running without a data file.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    records: Vec<AlgorithmRecord>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AlgorithmRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Makes every subsequent save fail with an I/O error.
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn records(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl AlgorithmRepository for MemoryRepository {
    fn load(&self) -> LoadReport {
        LoadReport {
            records: self.records.clone(),
            warnings: Vec::new(),
        }
    }

    fn save(&mut self, records: &[AlgorithmRecord]) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Io {
                path: "<memory>".into(),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
