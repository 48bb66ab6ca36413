use cashbook_core::filter::custom_search;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::helpers::{build_criteria, parse_output_format, CriteriaInput};
use crate::output::print_records;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.output.format.as_deref())?;
    let criteria = build_criteria(CriteriaInput {
        since: args.since.as_deref(),
        until: args.until.as_deref(),
        description: args.description.as_deref(),
        vendor: args.vendor.as_deref(),
        amount: args.amount.as_deref(),
    })
    .map_err(CliError::from)?;

    let ledger = ctx.open_ledger()?;
    let records = custom_search(ledger.records(), &criteria);

    let ui = ctx.ui_context(args.output.json, format);
    print_records(&ui, &records, None, ctx.quiet())
}
