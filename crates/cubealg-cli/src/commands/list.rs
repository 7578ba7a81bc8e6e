use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui;
use cubealg::workflows::manager::AlgorithmManager;
use tracing::info;

pub fn run(manager: &mut AlgorithmManager, args: ListArgs) -> Result<()> {
    let visible = manager.on_search_changed(args.query.unwrap_or_default());
    info!("{} algorithms match the current search.", visible.len());
    if visible.is_empty() {
        println!("No algorithms found.");
        return Ok(());
    }
    println!("{}", ui::algorithm_table(&visible));
    Ok(())
}
