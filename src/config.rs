//! Runtime configuration shared by every subcommand

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::order::JsonStore;

/// Default location of the order store
pub const DEFAULT_DATABASE_PATH: &str = "./data/orders.json";

/// Global options, settable from the command line or the environment
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Order store file (created on first use)
    #[arg(long, global = true, env = "DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Config {
    /// Open the configured order store
    pub fn open_store(&self) -> Result<JsonStore> {
        JsonStore::open(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn test_explicit_database_path() {
        let harness = Harness::parse_from(["lunch-orders", "--database", "/tmp/x.json", "-v"]);
        assert_eq!(harness.config.database, PathBuf::from("/tmp/x.json"));
        assert!(harness.config.verbose);
    }

    #[test]
    fn test_open_store_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            database: temp_dir.path().join("data").join("orders.json"),
            verbose: false,
        };
        let store = config.open_store().unwrap();
        assert_eq!(store.path(), config.database.as_path());
        assert!(temp_dir.path().join("data").is_dir());
    }
}
