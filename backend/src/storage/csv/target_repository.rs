use anyhow::{Context, Result};
use shared::SpendingTarget;
use std::fs;
use tracing::{debug, info};

use super::connection::CsvConnection;
use crate::storage::TargetStorage;

/// Spending target stored as a single YAML document:
///
/// ```yaml
/// amount: '250.00'
/// currency_code: GBP
/// period: monthly
/// ```
///
/// The amount is written as a quoted decimal string so it reads back
/// exactly. A bare number in a hand-edited file is accepted too.
#[derive(Debug, Clone)]
pub struct TargetRepository {
    connection: CsvConnection,
}

impl TargetRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl TargetStorage for TargetRepository {
    fn load_target(&self) -> Result<Option<SpendingTarget>> {
        let yaml_path = self.connection.target_file_path();
        if !yaml_path.exists() {
            debug!("No spending target at {}", yaml_path.display());
            return Ok(None);
        }

        let yaml_content =
            fs::read_to_string(&yaml_path).with_context(|| format!("Failed to read {}", yaml_path.display()))?;
        let target: SpendingTarget = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid spending target in {}", yaml_path.display()))?;

        debug!("Loaded spending target from {}", yaml_path.display());
        Ok(Some(target))
    }

    fn save_target(&self, target: &SpendingTarget) -> Result<()> {
        let yaml_path = self.connection.target_file_path();
        let yaml_content = serde_yaml::to_string(target)?;
        self.connection.write_atomically(&yaml_path, yaml_content.as_bytes())?;

        info!(
            "Saved spending target {} {} {} to {}",
            target.amount(),
            target.currency_code(),
            target.period(),
            yaml_path.display()
        );
        Ok(())
    }

    fn clear_target(&self) -> Result<bool> {
        let yaml_path = self.connection.target_file_path();
        if !yaml_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&yaml_path).with_context(|| format!("Failed to remove {}", yaml_path.display()))?;
        info!("Removed spending target {}", yaml_path.display());
        Ok(true)
    }
}
