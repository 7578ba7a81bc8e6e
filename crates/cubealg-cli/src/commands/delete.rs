use super::into_saved;
use crate::cli::DeleteArgs;
use crate::error::{CliError, Result};
use crate::ui;
use cubealg::workflows::manager::{AlgorithmManager, DeleteOutcome};
use tracing::info;

pub fn run(manager: &mut AlgorithmManager, args: DeleteArgs) -> Result<()> {
    run_with(manager, args, ui::confirm)
}

fn run_with(
    manager: &mut AlgorithmManager,
    args: DeleteArgs,
    confirm: impl FnOnce(&str) -> std::io::Result<bool>,
) -> Result<()> {
    let name = manager
        .store()
        .find(args.id)
        .map(|record| record.name.clone())
        .ok_or(CliError::NotFound(args.id))?;

    let confirmed = args.yes || confirm(&format!("Delete algorithm '{name}'?"))?;

    match manager.on_delete_selected(args.id, confirmed) {
        DeleteOutcome::Declined => {
            println!("Nothing deleted.");
            Ok(())
        }
        DeleteOutcome::NotFound => Err(CliError::NotFound(args.id)),
        DeleteOutcome::Deleted(applied) => {
            let record = into_saved(applied)?;
            info!("Deleted algorithm {} ({}).", record.id, record.name);
            println!("Deleted algorithm #{} '{}'.", record.id, record.name);
            Ok(())
        }
    }
}
