//! Deposit and payment command handlers.

use rust_decimal::Decimal;

use cashbook_core::record::parse_amount;
use cashbook_core::Record;

use crate::app::AppContext;
use crate::cli::EntryArgs;
use crate::clock::{Clock, SystemClock};
use crate::errors::CliError;
use crate::ui::{badge, Badge};

pub fn handle_deposit(ctx: &AppContext, args: &EntryArgs) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount).map_err(CliError::from)?;
    add_record(ctx, args, amount, "Deposit")
}

pub fn handle_payment(ctx: &AppContext, args: &EntryArgs) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount).map_err(CliError::from)?;
    add_record(ctx, args, -amount, "Payment")
}

fn add_record(
    ctx: &AppContext,
    args: &EntryArgs,
    amount: Decimal,
    noun: &str,
) -> anyhow::Result<()> {
    let now = SystemClock.now();
    let record = Record::new(
        now.date(),
        now.time(),
        args.description.trim(),
        args.vendor.trim(),
        amount,
    )
    .map_err(CliError::from)?;

    let mut ledger = ctx.open_ledger()?;
    let stored = ledger.append(record).map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        println!("{}", badge(&ui, Badge::Ok, &format!("{} added: {}", noun, stored)));
    }
    Ok(())
}
