use crate::core::io::traits::{AlgorithmRepository, LoadWarning, PersistenceError};
use crate::core::models::color::Sticker;
use crate::core::models::ids::AlgorithmId;
use crate::core::models::record::{AlgorithmKind, AlgorithmRecord, SIDE_ROW_LEN, Side, TOP_LAYER_LEN};
use crate::engine::config::StoreConfig;
use crate::engine::error::FormError;
use crate::engine::filter;
use crate::engine::session::FormSession;
use crate::engine::store::Store;
use tracing::{debug, info, instrument, warn};

/// A store mutation that took effect, and whether writing it out succeeded.
///
/// A failed save does not undo the mutation; the in-memory state stays
/// authoritative and the next successful save catches the file up.
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    pub save_error: Option<PersistenceError>,
}

impl<T> Applied<T> {
    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing changed.
    Declined,
    /// No record had that id; nothing changed.
    NotFound,
    Deleted(Applied<AlgorithmRecord>),
}

/// The action surface a presentation layer drives.
///
/// Owns the store, its repository, the current search query and the open
/// form, if any. Every successful store mutation is followed by a save.
pub struct AlgorithmManager {
    store: Store,
    repository: Box<dyn AlgorithmRepository>,
    query: String,
    form: Option<FormSession>,
    load_warnings: Vec<LoadWarning>,
}

impl AlgorithmManager {
    /// Loads the repository's records into a new store.
    #[instrument(skip_all, name = "open_manager")]
    pub fn open(repository: Box<dyn AlgorithmRepository>, config: StoreConfig) -> Self {
        let report = repository.load();
        info!(
            "Loaded {} algorithms from {}.",
            report.records.len(),
            repository.describe()
        );
        let (store, reassigned) = Store::from_records(report.records, config);
        let mut load_warnings = report.warnings;
        for r in reassigned {
            let warning = LoadWarning::IdReassigned {
                index: r.index,
                from: r.from,
                to: r.to,
            };
            warn!("{}", warning);
            load_warnings.push(warning);
        }
        Self {
            store,
            repository,
            query: String::new(),
            form: None,
            load_warnings,
        }
    }

    /// Problems recovered from while loading.
    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.load_warnings
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn form(&self) -> Option<&FormSession> {
        self.form.as_ref()
    }

    /// Records to display under the current query.
    pub fn visible(&self) -> Vec<&AlgorithmRecord> {
        filter::filter(self.store.all(), &self.query)
    }

    pub fn on_search_changed(&mut self, query: impl Into<String>) -> Vec<&AlgorithmRecord> {
        self.query = query.into();
        debug!("Search query is now {:?}.", self.query);
        self.visible()
    }

    pub fn on_add(&mut self) -> &FormSession {
        self.form.insert(FormSession::begin_add())
    }

    pub fn on_edit_selected(&mut self, id: AlgorithmId) -> Result<&FormSession, FormError> {
        let session = FormSession::begin_edit(&self.store, id)?;
        Ok(self.form.insert(session))
    }

    pub fn on_delete_selected(&mut self, id: AlgorithmId, confirmed: bool) -> DeleteOutcome {
        if !confirmed {
            return DeleteOutcome::Declined;
        }
        match self.store.delete(id) {
            Some(record) => DeleteOutcome::Deleted(self.persist(record)),
            None => {
                debug!("Delete of unknown algorithm {} ignored.", id);
                DeleteOutcome::NotFound
            }
        }
    }

    pub fn on_form_name_changed(&mut self, name: impl Into<String>) -> Result<(), FormError> {
        self.session_mut()?.set_name(name);
        Ok(())
    }

    pub fn on_form_kind_changed(&mut self, kind: AlgorithmKind) -> Result<(), FormError> {
        self.session_mut()?.set_kind(kind);
        Ok(())
    }

    pub fn on_form_formula_changed(&mut self, formula: impl Into<String>) -> Result<(), FormError> {
        self.session_mut()?.set_formula(formula);
        Ok(())
    }

    pub fn on_form_top_layer_changed(
        &mut self,
        top: [Sticker; TOP_LAYER_LEN],
    ) -> Result<(), FormError> {
        self.session_mut()?.set_top_layer(top);
        Ok(())
    }

    pub fn on_form_side_changed(
        &mut self,
        side: Side,
        row: [Sticker; SIDE_ROW_LEN],
    ) -> Result<(), FormError> {
        self.session_mut()?.set_side(side, row);
        Ok(())
    }

    pub fn on_cube_sticker_clicked(&mut self, index: usize) -> Result<Sticker, FormError> {
        self.session_mut()?.cycle_top_sticker(index)
    }

    pub fn on_side_sticker_clicked(
        &mut self,
        side: Side,
        index: usize,
    ) -> Result<Sticker, FormError> {
        self.session_mut()?.cycle_side_sticker(side, index)
    }

    pub fn on_reset_colors(&mut self) -> Result<(), FormError> {
        self.session_mut()?.reset_colors();
        Ok(())
    }

    /// Commits the open form.
    ///
    /// A validation failure keeps the form open for correction. A store
    /// failure (stale id, record limit) closes it, since retrying cannot help.
    pub fn on_form_save(&mut self) -> Result<Applied<AlgorithmId>, FormError> {
        let session = self.form.as_ref().ok_or(FormError::NoSession)?;
        match session.commit(&mut self.store) {
            Ok(id) => {
                self.form = None;
                Ok(self.persist(id))
            }
            Err(FormError::Validation(e)) => Err(e.into()),
            Err(e) => {
                self.form = None;
                Err(e)
            }
        }
    }

    pub fn on_form_cancel(&mut self) {
        if let Some(session) = self.form.take() {
            session.cancel();
        }
    }

    /// Writes the current store out, outside of any mutation.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        self.repository.save(self.store.all())
    }

    fn persist<T>(&mut self, value: T) -> Applied<T> {
        let save_error = self.save().err();
        if let Some(e) = &save_error {
            warn!("Change kept in memory but not saved: {}", e);
        }
        Applied { value, save_error }
    }

    fn session_mut(&mut self) -> Result<&mut FormSession, FormError> {
        self.form.as_mut().ok_or(FormError::NoSession)
    }
}
