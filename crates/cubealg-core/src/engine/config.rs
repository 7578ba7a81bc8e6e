use thiserror::Error;

pub const DEFAULT_MAX_RECORDS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Upper bound on the number of records; `None` disables the limit.
    pub max_records: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_records: Some(DEFAULT_MAX_RECORDS),
        }
    }
}

#[derive(Default)]
pub struct StoreConfigBuilder {
    max_records: Option<Option<usize>>,
}

impl StoreConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_records(mut self, limit: usize) -> Self {
        self.max_records = Some(Some(limit));
        self
    }
    pub fn unlimited(mut self) -> Self {
        self.max_records = Some(None);
        self
    }

    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let max_records = self.max_records.unwrap_or(Some(DEFAULT_MAX_RECORDS));
        if max_records == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_records",
                reason: "must be at least 1; use `unlimited` to disable the limit".to_string(),
            });
        }
        Ok(StoreConfig { max_records })
    }
}
