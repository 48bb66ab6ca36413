//! Output formatting helpers for the CLI.
//!
//! Record listings go out as JSON, plain `date|time|description|vendor|amount`
//! lines, or a pretty table, depending on the resolved output mode.

mod json;
mod text;

// Re-export public API
pub use json::records_json;
pub use text::print_record_list;

use cashbook_core::{DateRange, Record};

use crate::ui::UiContext;

/// Print a record listing in whichever mode `ctx` resolved to.
pub fn print_records(
    ctx: &UiContext,
    records: &[Record],
    range: Option<DateRange>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&records_json(records, range))?
        );
        return Ok(());
    }
    print_record_list(ctx, records, quiet)
}
