//! Cashbook CLI - a plain-text personal finance ledger
//!
//! This is the command-line interface for Cashbook. Without a subcommand it
//! runs the interactive menu; subcommands expose the same operations for
//! scripting.

mod app;
mod cli;
mod clock;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod menu;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, interactive, misc};
use crate::constants::LOG_ENV;
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);

        let error_msg = format!("{:#}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None => interactive::handle_interactive(ctx),
        Some(Commands::Deposit(args)) => entries::handle_deposit(ctx, args),
        Some(Commands::Payment(args)) => entries::handle_payment(ctx, args),
        Some(Commands::List(args)) => entries::handle_list(ctx, args),
        Some(Commands::Report(args)) => entries::handle_report(ctx, args),
        Some(Commands::Search(args)) => entries::handle_search(ctx, args),
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
    }
}

/// Logs go to stderr so they never mix with listings on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(&error[idx + 1..])),
        None => (error, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        assert_eq!(
            split_hint("Malformed record on line 2\nHint: pass --lenient"),
            ("Malformed record on line 2", Some("Hint: pass --lenient"))
        );
        assert_eq!(split_hint("plain failure"), ("plain failure", None));
    }
}
