pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;

use crate::cli::FormArgs;
use crate::error::{CliError, Result};
use cubealg::core::models::ids::AlgorithmId;
use cubealg::core::models::record::Side;
use cubealg::workflows::manager::{AlgorithmManager, Applied};
use std::io::IsTerminal;
use tracing::debug;

/// Feeds the form flags into the open form in the order a user would:
/// reset, then text fields, then whole rows, then individual clicks.
fn apply_form_args(manager: &mut AlgorithmManager, form: &FormArgs) -> Result<()> {
    if form.reset_colors {
        manager.on_reset_colors()?;
    }
    if let Some(name) = &form.name {
        manager.on_form_name_changed(name.as_str())?;
    }
    if let Some(kind) = &form.kind {
        manager.on_form_kind_changed(kind.clone())?;
    }
    if let Some(formula) = &form.formula {
        manager.on_form_formula_changed(formula.as_str())?;
    }
    if let Some(top) = form.top {
        manager.on_form_top_layer_changed(top)?;
    }
    let rows = [
        (Side::Front, form.front),
        (Side::Right, form.right),
        (Side::Back, form.back),
        (Side::Left, form.left),
    ];
    for (side, row) in rows {
        if let Some(row) = row {
            manager.on_form_side_changed(side, row)?;
        }
    }
    for &index in &form.click_top {
        let sticker = manager.on_cube_sticker_clicked(index)?;
        debug!("Top sticker {} is now {}.", index, sticker.label());
    }
    for &(side, index) in &form.click_side {
        let sticker = manager.on_side_sticker_clicked(side, index)?;
        debug!("{} sticker {} is now {}.", side, index, sticker.label());
    }
    Ok(())
}

/// Fills the form the caller opened and commits it. The form is closed
/// afterwards whatever the outcome.
fn fill_and_commit(manager: &mut AlgorithmManager, form: &FormArgs) -> Result<AlgorithmId> {
    if let Err(e) = apply_form_args(manager, form) {
        manager.on_form_cancel();
        return Err(e);
    }
    let result = manager.on_form_save();
    if manager.form().is_some() {
        manager.on_form_cancel();
    }
    into_saved(result?)
}

/// A one-shot process loses unsaved changes on exit, so a failed save is an error here.
fn into_saved<T>(applied: Applied<T>) -> Result<T> {
    match applied.save_error {
        None => Ok(applied.value),
        Some(e) => Err(CliError::Persistence(e)),
    }
}

fn stdout_is_colored() -> bool {
    std::io::stdout().is_terminal()
}
