//! Application context for the Cashbook CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded settings.

use once_cell::unsync::OnceCell;
use tracing::{error, info, warn};

use cashbook_core::{CashbookError, FlatFile, Ledger};

use crate::cli::Cli;
use crate::errors::CliError;
use crate::ui::{OutputFormat, UiContext};

use super::settings::{load_settings, Settings};

/// Application context that bundles CLI args with resolved settings.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the settings, loading them lazily if needed.
    pub fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| load_settings(self.cli))
    }

    /// Build a UI context for the given output flags.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Load the ledger file named by the settings.
    pub fn open_ledger(&self) -> anyhow::Result<Ledger<FlatFile>> {
        let settings = self.settings()?;
        let ledger = Ledger::open(
            FlatFile::new(&settings.ledger_path),
            settings.load_policy,
        )
        .map_err(CliError::from)?;
        log_loaded(settings, &ledger);
        Ok(ledger)
    }

    /// Load the ledger, falling back to an empty one when the file cannot be read.
    ///
    /// The read error is handed back for the caller to report. Malformed
    /// records under the strict policy are still fatal.
    pub fn open_ledger_or_empty(
        &self,
    ) -> anyhow::Result<(Ledger<FlatFile>, Option<CashbookError>)> {
        let settings = self.settings()?;
        let backend = FlatFile::new(&settings.ledger_path);
        match Ledger::open(backend.clone(), settings.load_policy) {
            Ok(ledger) => {
                log_loaded(settings, &ledger);
                Ok((ledger, None))
            }
            Err(err @ CashbookError::Storage(_)) => {
                error!(
                    path = %settings.ledger_path.display(),
                    error = %err,
                    "ledger could not be read, starting empty"
                );
                Ok((Ledger::empty(backend), Some(err)))
            }
            Err(err) => Err(CliError::from(err).into()),
        }
    }
}

fn log_loaded(settings: &Settings, ledger: &Ledger<FlatFile>) {
    let report = ledger.load_report();
    info!(
        path = %settings.ledger_path.display(),
        records = report.loaded,
        "ledger opened"
    );
    if report.dropped() > 0 {
        warn!(
            skipped = report.skipped,
            rejected = report.rejected,
            "some ledger lines were not loaded"
        );
    }
}
