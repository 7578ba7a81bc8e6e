use super::fill_and_commit;
use crate::cli::EditArgs;
use crate::error::Result;
use cubealg::workflows::manager::AlgorithmManager;
use tracing::info;

pub fn run(manager: &mut AlgorithmManager, args: EditArgs) -> Result<()> {
    manager.on_edit_selected(args.id)?;
    let id = fill_and_commit(manager, &args.form)?;
    info!("Updated algorithm {}.", id);
    println!("Updated algorithm #{id}.");
    Ok(())
}
