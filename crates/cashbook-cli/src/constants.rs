//! Constants used throughout the CLI.

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "CASHBOOK_CONFIG";

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "CASHBOOK_LOG";

/// File name of the ledger inside the data directory.
pub const LEDGER_FILE_NAME: &str = "transactions.csv";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Ledger file could not be read, parsed, or written.
    pub const STORAGE_FAILED: i32 = 5;
}
