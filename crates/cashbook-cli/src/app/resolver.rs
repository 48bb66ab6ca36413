//! Path resolution for the config and ledger files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, CashbookConfig};
use crate::constants::CONFIG_ENV;

/// Config file location: `$CASHBOOK_CONFIG`, else the XDG default.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Ledger file location: `--file`/`CASHBOOK_FILE`, then config, then the XDG default.
pub fn resolve_ledger_path(cli: &Cli, config: &CashbookConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.ledger.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_ledger_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["cashbook", "--file", "/tmp/flag.csv", "list"]).unwrap();
        let mut config = CashbookConfig::default();
        config.ledger.path = Some("/tmp/config.csv".to_string());

        assert_eq!(
            resolve_ledger_path(&cli, &config).unwrap(),
            PathBuf::from("/tmp/flag.csv")
        );
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let cli = Cli::try_parse_from(["cashbook", "--file", "", "list"]).unwrap();
        let mut config = CashbookConfig::default();
        config.ledger.path = Some("/tmp/config.csv".to_string());

        assert_eq!(
            resolve_ledger_path(&cli, &config).unwrap(),
            PathBuf::from("/tmp/config.csv")
        );
    }
}
