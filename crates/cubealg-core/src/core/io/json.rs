use super::traits::{AlgorithmRepository, LoadReport, LoadWarning, PersistenceError};
use crate::core::models::color::Sticker;
use crate::core::models::ids::AlgorithmId;
use crate::core::models::record::{
    AlgorithmFields, AlgorithmKind, AlgorithmRecord, CubeState, MAX_FORMULA_CHARS, MAX_NAME_CHARS,
    SIDE_ROW_LEN, Side, TOP_LAYER_LEN, truncate_chars,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_DATA_FILE: &str = "cube_algorithms.json";

/// One element of the persisted array, in member order.
#[derive(Debug, Serialize)]
struct RecordDocument<'a> {
    id: i64,
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    formula: &'a str,
    top_layer: String,
    side_front: String,
    side_right: String,
    side_back: String,
    side_left: String,
}

impl<'a> From<&'a AlgorithmRecord> for RecordDocument<'a> {
    fn from(record: &'a AlgorithmRecord) -> Self {
        Self {
            id: record.id.0,
            name: &record.name,
            kind: record.kind.as_str(),
            formula: &record.formula,
            top_layer: record.cube.top_string(),
            side_front: record.cube.side_string(Side::Front),
            side_right: record.cube.side_string(Side::Right),
            side_back: record.cube.side_string(Side::Back),
            side_left: record.cube.side_string(Side::Left),
        }
    }
}

/// Stores records as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the copy kept when the data file turns out to be malformed.
    pub fn backup_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".bak")
    }

    fn temp_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".tmp")
    }

    fn malformed(&self, reason: String) -> LoadReport {
        let backup = self.backup_path();
        let backup = match fs::copy(&self.path, &backup) {
            Ok(_) => Some(backup),
            Err(e) => {
                warn!("Could not back up {:?} to {:?}: {}", self.path, backup, e);
                None
            }
        };
        let warning = LoadWarning::Malformed {
            path: self.path.clone(),
            reason,
            backup,
        };
        warn!("{}", warning);
        LoadReport {
            records: Vec::new(),
            warnings: vec![warning],
        }
    }
}

impl AlgorithmRepository for JsonFile {
    #[instrument(skip_all, name = "json_load", fields(path = %self.path.display()))]
    fn load(&self) -> LoadReport {
        if !self.path.exists() {
            info!("No data file at {:?}; starting empty.", self.path);
            return LoadReport::empty();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                let warning = LoadWarning::Unreadable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                };
                warn!("{}", warning);
                return LoadReport {
                    records: Vec::new(),
                    warnings: vec![warning],
                };
            }
        };

        let root: Value = match serde_json::from_str(&content) {
            Ok(root) => root,
            Err(e) => return self.malformed(e.to_string()),
        };
        let Value::Array(elements) = root else {
            return self.malformed("top-level value is not an array".to_string());
        };

        let report = decode_elements(&elements);
        for warning in &report.warnings {
            warn!("{}", warning);
        }
        debug!(
            "Loaded {} records from {:?} ({} warnings).",
            report.records.len(),
            self.path,
            report.warnings.len()
        );
        report
    }

    #[instrument(skip_all, name = "json_save", fields(path = %self.path.display(), records = records.len()))]
    fn save(&mut self, records: &[AlgorithmRecord]) -> Result<(), PersistenceError> {
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| PersistenceError::Io { path, source }
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let documents: Vec<RecordDocument<'_>> = records.iter().map(Into::into).collect();
        let temp_path = self.temp_path();
        let file = File::create(&temp_path).map_err(io_error(&temp_path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &documents).map_err(|source| {
            PersistenceError::Json {
                path: temp_path.clone(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(io_error(&temp_path))?;
        writer.flush().map_err(io_error(&temp_path))?;
        drop(writer);

        fs::rename(&temp_path, &self.path).map_err(io_error(&self.path))?;
        debug!("Saved {} records to {:?}.", records.len(), self.path);
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Decodes array elements field by field, defaulting what cannot be read.
pub(crate) fn decode_elements(elements: &[Value]) -> LoadReport {
    let mut report = LoadReport::empty();
    for (index, element) in elements.iter().enumerate() {
        match element.as_object() {
            Some(object) => {
                let record = decode_record(index, object, &mut report.warnings);
                report.records.push(record);
            }
            None => report.warnings.push(LoadWarning::SkippedElement { index }),
        }
    }
    report
}

fn decode_record(
    index: usize,
    object: &Map<String, Value>,
    warnings: &mut Vec<LoadWarning>,
) -> AlgorithmRecord {
    let id = object.get("id").and_then(Value::as_i64).unwrap_or_else(|| {
        warnings.push(LoadWarning::FieldDefaulted { index, field: "id" });
        0
    });

    let name = text_member(object, "name", index, warnings)
        .map(|s| truncate_chars(s, MAX_NAME_CHARS))
        .unwrap_or_default();
    let kind = text_member(object, "type", index, warnings)
        .map(|s| s.parse::<AlgorithmKind>().unwrap_or_default())
        .unwrap_or_default();
    let formula = text_member(object, "formula", index, warnings)
        .map(|s| truncate_chars(s, MAX_FORMULA_CHARS))
        .unwrap_or_default();

    let mut cube = CubeState::neutral();
    if let Some(top) = sticker_member::<TOP_LAYER_LEN>(object, "top_layer", index, warnings) {
        cube.top = top;
    }
    for side in Side::ALL {
        if let Some(row) = sticker_member::<SIDE_ROW_LEN>(object, side.field_name(), index, warnings) {
            cube.set_side(side, row);
        }
    }

    AlgorithmRecord::new(
        AlgorithmId(id),
        AlgorithmFields {
            name,
            kind,
            formula,
            cube,
        },
    )
}

fn text_member<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    index: usize,
    warnings: &mut Vec<LoadWarning>,
) -> Option<&'a str> {
    let value = object.get(field).and_then(Value::as_str);
    if value.is_none() {
        warnings.push(LoadWarning::FieldDefaulted { index, field });
    }
    value
}

fn sticker_member<const N: usize>(
    object: &Map<String, Value>,
    field: &'static str,
    index: usize,
    warnings: &mut Vec<LoadWarning>,
) -> Option<[Sticker; N]> {
    let raw = text_member(object, field, index, warnings)?;
    let decoded = CubeState::decode_lossy::<N>(raw);
    if decoded.is_none() {
        warnings.push(LoadWarning::FieldDefaulted { index, field });
    }
    decoded
}
