use super::error::{FormError, StoreError, ValidationError};
use super::store::Store;
use crate::core::models::color::Sticker;
use crate::core::models::ids::AlgorithmId;
use crate::core::models::record::{
    AlgorithmFields, AlgorithmKind, CubeState, SIDE_ROW_LEN, Side, TOP_LAYER_LEN,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    Editing(AlgorithmId),
}

/// Working copy of one record while it is being added or edited.
///
/// Nothing here reaches the store until [`FormSession::commit`] succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    mode: FormMode,
    fields: AlgorithmFields,
}

impl FormSession {
    pub fn begin_add() -> Self {
        Self {
            mode: FormMode::Adding,
            fields: AlgorithmFields {
                name: String::new(),
                kind: AlgorithmKind::default(),
                formula: String::new(),
                cube: CubeState::yellow_top(),
            },
        }
    }

    pub fn begin_edit(store: &Store, id: AlgorithmId) -> Result<Self, FormError> {
        let record = store.find(id).ok_or(StoreError::NotFound(id))?;
        Ok(Self {
            mode: FormMode::Editing(id),
            fields: record.fields(),
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &AlgorithmFields {
        &self.fields
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_kind(&mut self, kind: AlgorithmKind) {
        self.fields.kind = kind;
    }

    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.fields.formula = formula.into();
    }

    pub fn set_top_layer(&mut self, top: [Sticker; TOP_LAYER_LEN]) {
        self.fields.cube.top = top;
    }

    pub fn set_side(&mut self, side: Side, row: [Sticker; SIDE_ROW_LEN]) {
        self.fields.cube.set_side(side, row);
    }

    pub fn cycle_top_sticker(&mut self, index: usize) -> Result<Sticker, FormError> {
        let slot = self
            .fields
            .cube
            .top
            .get_mut(index)
            .ok_or(FormError::TopIndex(index))?;
        *slot = slot.next();
        Ok(*slot)
    }

    pub fn cycle_side_sticker(&mut self, side: Side, index: usize) -> Result<Sticker, FormError> {
        let slot = self
            .fields
            .cube
            .side_mut(side)
            .get_mut(index)
            .ok_or(FormError::SideIndex { side, index })?;
        *slot = slot.next();
        Ok(*slot)
    }

    pub fn reset_colors(&mut self) {
        self.fields.cube = CubeState::yellow_top();
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fields.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.fields.formula.is_empty() {
            return Err(ValidationError::EmptyFormula);
        }
        Ok(())
    }

    /// Validates the working copy and writes it to `store`.
    ///
    /// On error the store is untouched and the session can be corrected and
    /// committed again.
    pub fn commit(&self, store: &mut Store) -> Result<AlgorithmId, FormError> {
        self.validate()?;
        let id = match self.mode {
            FormMode::Adding => store.add(self.fields.clone())?,
            FormMode::Editing(id) => {
                store.update(id, self.fields.clone())?;
                id
            }
        };
        debug!("Form committed for algorithm {}.", id);
        Ok(id)
    }

    /// Discards the working copy.
    pub fn cancel(self) {
        debug!("Form for {:?} discarded.", self.mode);
    }
}
