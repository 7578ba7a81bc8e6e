use super::fill_and_commit;
use crate::cli::AddArgs;
use crate::error::Result;
use cubealg::core::models::ids::AlgorithmId;
use cubealg::workflows::manager::AlgorithmManager;
use tracing::info;

pub fn run(manager: &mut AlgorithmManager, args: AddArgs) -> Result<AlgorithmId> {
    manager.on_add();
    let id = fill_and_commit(manager, &args.form)?;
    info!("Added algorithm {}.", id);
    println!("Added algorithm #{id}.");
    Ok(id)
}
