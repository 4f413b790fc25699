//! Temp-dir backed storage fixtures, removed when dropped even if a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;

pub struct TestEnvironment {
    pub connection: CsvConnection,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            _temp_dir: temp_dir,
        })
    }
}
