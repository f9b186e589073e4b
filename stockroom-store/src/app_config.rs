use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub import: ImportConfig,
    pub backup: BackupConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite file holding the record store
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Inventory sheet loaded at startup
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    pub path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let s = with_defaults(config::Config::builder())?
            // Optional local overrides, e.g. stockroom.toml
            .add_source(config::File::with_name("stockroom").required(false))
            // Eg.. `STOCKROOM_BACKUP__PATH=/tmp/backup.csv` sets `backup.path`
            .add_source(config::Environment::with_prefix("STOCKROOM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

/// The fixed file names used when nothing overrides them.
fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("database.path", "inventory.db")?
        .set_default("import.path", "inventory.csv")?
        .set_default("backup.path", "backup.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config: Config = with_defaults(config::Config::builder())
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.path, PathBuf::from("inventory.db"));
        assert_eq!(config.import.path, PathBuf::from("inventory.csv"));
        assert_eq!(config.backup.path, PathBuf::from("backup.csv"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let config: Config = with_defaults(config::Config::builder())
            .unwrap()
            .set_override("backup.path", "nightly.csv")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.backup.path, PathBuf::from("nightly.csv"));
        assert_eq!(config.database.path, PathBuf::from("inventory.db"));
    }
}
