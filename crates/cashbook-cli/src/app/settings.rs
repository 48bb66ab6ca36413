use std::path::PathBuf;

use tracing::debug;

use cashbook_core::LoadPolicy;

use crate::cli::Cli;
use crate::config::{read_config, CashbookConfig};

use super::resolver::{resolve_config_path, resolve_ledger_path};

/// Effective settings after merging flags, environment, and config file.
pub struct Settings {
    pub ledger_path: PathBuf,
    pub load_policy: LoadPolicy,
}

pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config_path = resolve_config_path()?;
    let config = if config_path.exists() {
        debug!(path = %config_path.display(), "reading config");
        read_config(&config_path)?
    } else {
        CashbookConfig::default()
    };
    merge(cli, &config)
}

fn merge(cli: &Cli, config: &CashbookConfig) -> anyhow::Result<Settings> {
    let load_policy = if cli.lenient {
        LoadPolicy::Lenient
    } else {
        config.load.policy
    };
    Ok(Settings {
        ledger_path: resolve_ledger_path(cli, config)?,
        load_policy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_lenient_flag_overrides_config() {
        let cli = Cli::try_parse_from(["cashbook", "--file", "x.csv", "--lenient", "list"]).unwrap();
        let config = CashbookConfig::default();
        let settings = merge(&cli, &config).unwrap();
        assert_eq!(settings.load_policy, LoadPolicy::Lenient);
    }

    #[test]
    fn test_config_policy_used_without_flag() {
        let cli = Cli::try_parse_from(["cashbook", "--file", "x.csv", "list"]).unwrap();
        let mut config = CashbookConfig::default();
        config.load.policy = LoadPolicy::Lenient;
        let settings = merge(&cli, &config).unwrap();
        assert_eq!(settings.load_policy, LoadPolicy::Lenient);
        assert_eq!(settings.ledger_path, PathBuf::from("x.csv"));
    }
}
