use crate::core::models::ids::AlgorithmId;
use crate::core::models::record::AlgorithmRecord;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to write (or, for explicit reads, to access) the backing storage.
///
/// Never fatal: the in-memory store stays authoritative until the next
/// successful save.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON encoding error for '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A recovered problem met while loading stored records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file exists but could not be read.
    Unreadable { path: PathBuf, reason: String },
    /// The file is not valid JSON, or its root is not an array. All records
    /// are dropped; `backup` names the copy of the original bytes, if one
    /// could be written.
    Malformed {
        path: PathBuf,
        reason: String,
        backup: Option<PathBuf>,
    },
    /// An array element that is not an object was ignored.
    SkippedElement { index: usize },
    /// A member was missing, had the wrong type or was too short, and its
    /// default value was used instead.
    FieldDefaulted { index: usize, field: &'static str },
    /// The `index`-th loaded record repeated an earlier id and was given a new one.
    IdReassigned {
        index: usize,
        from: AlgorithmId,
        to: AlgorithmId,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Unreadable { path, reason } => {
                write!(f, "Could not read '{}': {}", path.display(), reason)
            }
            LoadWarning::Malformed {
                path,
                reason,
                backup,
            } => {
                write!(
                    f,
                    "Ignoring malformed data file '{}': {}",
                    path.display(),
                    reason
                )?;
                match backup {
                    Some(backup) => write!(f, " (original kept at '{}')", backup.display()),
                    None => write!(f, " (no backup could be written)"),
                }
            }
            LoadWarning::SkippedElement { index } => {
                write!(f, "Entry #{} is not an object and was skipped", index)
            }
            LoadWarning::FieldDefaulted { index, field } => {
                write!(f, "Entry #{}: '{}' missing or invalid, default used", index, field)
            }
            LoadWarning::IdReassigned { index, from, to } => {
                write!(
                    f,
                    "Record #{} repeats id {} and was given id {}",
                    index, from, to
                )
            }
        }
    }
}

/// Result of loading: the records that could be recovered, plus what was not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<AlgorithmRecord>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Defines where algorithm records live between sessions.
///
/// The store itself performs no I/O; the layer that owns both a store and a
/// repository calls [`save`](AlgorithmRepository::save) after each mutation.
pub trait AlgorithmRepository {
    /// Reads every stored record in its stored order.
    ///
    /// Loading does not fail: a missing backing store yields an empty report,
    /// and damaged data is recovered as far as possible with the losses listed
    /// in [`LoadReport::warnings`].
    fn load(&self) -> LoadReport;

    /// Replaces the stored records with `records`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, records: &[AlgorithmRecord]) -> Result<(), PersistenceError>;

    /// Short human-readable description of the backing storage.
    fn describe(&self) -> String;
}
