//! Launch the interactive menu on stdin/stdout.

use std::io;

use crate::app::AppContext;
use crate::clock::SystemClock;
use crate::helpers::Console;
use crate::menu::Session;
use crate::ui::print_error;

pub fn handle_interactive(ctx: &AppContext) -> anyhow::Result<()> {
    let (ledger, load_error) = ctx.open_ledger_or_empty()?;
    if let Some(err) = load_error {
        let ui = ctx.ui_context(false, None);
        print_error(&ui, &format!("Error loading transactions: {}", err), None);
    }

    let report = *ledger.load_report();
    if report.dropped() > 0 && !ctx.quiet() {
        println!(
            "Skipped {} unreadable line(s) in {}.",
            report.dropped(),
            ledger.backend().path().display()
        );
    }

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let clock = SystemClock;
    Session::new(ledger, console, &clock).run()
}
