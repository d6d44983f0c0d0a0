//! Init command: write a default configuration file.

use std::path::Path;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Write the default configuration to `path`.
pub fn init(path: &Path, force: bool) -> CliResult<String> {
    if path.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    CliConfig::default().save(path)?;

    Ok(format!("Wrote default configuration to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init(&path, false).unwrap();
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config, CliConfig::default());

        // Second run refuses without --force
        assert!(init(&path, false).is_err());
        assert!(init(&path, true).is_ok());
    }
}
