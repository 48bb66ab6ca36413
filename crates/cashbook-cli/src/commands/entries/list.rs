use cashbook_core::filter::{deposits, payments};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::print_records;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.output.format.as_deref())?;
    let ledger = ctx.open_ledger()?;

    let records = if args.deposits {
        deposits(ledger.records())
    } else if args.payments {
        payments(ledger.records())
    } else {
        ledger.records().to_vec()
    };

    let ui = ctx.ui_context(args.output.json, format);
    print_records(&ui, &records, None, ctx.quiet())
}
