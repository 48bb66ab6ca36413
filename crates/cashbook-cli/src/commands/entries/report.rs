use cashbook_core::filter::by_period;
use cashbook_core::Period;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::clock::{Clock, SystemClock};
use crate::helpers::parse_output_format;
use crate::output::print_records;

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.output.format.as_deref())?;
    let ledger = ctx.open_ledger()?;

    let period = Period::from(args.period);
    let today = SystemClock.today();
    let range = period.range(today);
    let records = by_period(ledger.records(), period, today);

    let ui = ctx.ui_context(args.output.json, format);
    if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{} ({})", period.title(), range);
    }
    print_records(&ui, &records, Some(range), ctx.quiet())
}
