use super::stdout_is_colored;
use crate::error::{CliError, Result};
use crate::ui;
use cubealg::core::models::ids::AlgorithmId;
use cubealg::workflows::manager::AlgorithmManager;

pub fn run(manager: &AlgorithmManager, id: AlgorithmId) -> Result<()> {
    let record = manager.store().find(id).ok_or(CliError::NotFound(id))?;
    ui::print_record(record, stdout_is_colored());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{manager_with, sample};

    #[test]
    fn unknown_id_is_reported() {
        let manager = manager_with(sample());
        assert!(matches!(
            run(&manager, AlgorithmId(9)),
            Err(CliError::NotFound(AlgorithmId(9)))
        ));
        assert!(run(&manager, AlgorithmId(1)).is_ok());
    }
}
