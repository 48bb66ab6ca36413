//! Text and table output for record listings.

use std::io::{self, Write};

use cashbook_core::present::{render, EMPTY_MESSAGE};
use cashbook_core::Record;

use crate::ui::{badge, record_table, summary, Badge, UiContext};

/// Print records in the plain line format or as a pretty table.
pub fn print_record_list(ctx: &UiContext, records: &[Record], quiet: bool) -> anyhow::Result<()> {
    if !ctx.mode.is_pretty() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render(&mut out, records)?;
        out.flush()?;
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", badge(ctx, Badge::Warn, EMPTY_MESSAGE));
        return Ok(());
    }
    println!("{}", record_table(ctx, records));
    if !quiet {
        println!("{}", summary(ctx, records));
    }
    Ok(())
}
