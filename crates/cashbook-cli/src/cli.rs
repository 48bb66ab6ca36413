use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cashbook_core::{Period, VERSION};

/// Cashbook - a plain-text personal finance ledger
///
/// Run without a subcommand for the interactive menu.
#[derive(Parser)]
#[command(name = "cashbook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file
    #[arg(short, long, global = true, env = "CASHBOOK_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip lines with unreadable dates, times, or amounts instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII-only table borders
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `deposit` and `payment` commands
#[derive(Args)]
pub struct EntryArgs {
    /// What the money was for
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Who paid or was paid
    #[arg(short, long, default_value = "")]
    pub vendor: String,

    /// Amount (payments take the magnitude; it is stored as negative)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
}

/// Output selection shared by listing commands
#[derive(Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only deposits
    #[arg(long, conflicts_with = "payments")]
    pub deposits: bool,

    /// Only payments
    #[arg(long)]
    pub payments: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Report period
    #[arg(value_enum, value_name = "PERIOD")]
    pub period: PeriodArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Vendor contains (case-insensitive)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Description contains (case-insensitive)
    #[arg(long)]
    pub description: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Exact amount (payments are negative)
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a deposit
    Deposit(EntryArgs),

    /// Record a payment (debit)
    Payment(EntryArgs),

    /// List transactions, newest first
    List(ListArgs),

    /// Show a pre-defined period report
    Report(ReportArgs),

    /// Search transactions by any combination of criteria
    Search(SearchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Report periods accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    MonthToDate,
    PreviousMonth,
    YearToDate,
    PreviousYear,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::MonthToDate => Period::MonthToDate,
            PeriodArg::PreviousMonth => Period::PreviousMonth,
            PeriodArg::YearToDate => Period::YearToDate,
            PeriodArg::PreviousYear => Period::PreviousYear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_payment_accepts_amount() {
        let cli = Cli::try_parse_from([
            "cashbook", "payment", "-d", "Rent", "-v", "Landlord", "-a", "900",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Payment(args)) => {
                assert_eq!(args.description, "Rent");
                assert_eq!(args.amount, "900");
            }
            _ => panic!("expected payment command"),
        }
    }

    #[test]
    fn test_list_flags_conflict() {
        assert!(Cli::try_parse_from(["cashbook", "list", "--deposits", "--payments"]).is_err());
    }

    #[test]
    fn test_report_period_names() {
        let cli = Cli::try_parse_from(["cashbook", "report", "previous-month"]).unwrap();
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(Period::from(args.period), Period::PreviousMonth)
            }
            _ => panic!("expected report command"),
        }
    }
}
