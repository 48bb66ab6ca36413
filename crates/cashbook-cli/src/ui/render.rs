//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table as ComfyTable};
use rust_decimal::Decimal;

use cashbook_core::present::newest_first;
use cashbook_core::record::{DATE_FORMAT, TIME_FORMAT};
use cashbook_core::Record;

use super::context::UiContext;
use super::theme::{amount_style, dim, styled, Badge};

const COLUMNS: [&str; 5] = ["Date", "Time", "Description", "Vendor", "Amount"];

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a hint line with a dim label.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let text = text.strip_prefix("Hint: ").unwrap_or(text);
    format!("{} {}", styled("Hint:", dim(), ctx.color), text)
}

/// Render records newest first as a bordered table.
pub fn record_table(ctx: &UiContext, records: &[Record]) -> String {
    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(COLUMNS);

    for record in newest_first(records) {
        let mut amount = Cell::new(record.amount()).set_alignment(CellAlignment::Right);
        if ctx.color {
            amount = amount.fg(if record.is_payment() {
                Color::Red
            } else {
                Color::Green
            });
        }
        table.add_row(vec![
            Cell::new(record.date().format(DATE_FORMAT)),
            Cell::new(record.time().format(TIME_FORMAT)),
            Cell::new(record.description()),
            Cell::new(record.vendor()),
            amount,
        ]);
    }

    table.to_string()
}

/// Totals line shown under a pretty table.
///
/// A total beyond the decimal range prints as `overflow`.
pub fn summary(ctx: &UiContext, records: &[Record]) -> String {
    let deposits = total(records, Record::is_deposit);
    let payments = total(records, Record::is_payment);
    let net = deposits.zip(payments).and_then(|(d, p)| d.checked_add(p));
    let noun = if records.len() == 1 {
        "transaction"
    } else {
        "transactions"
    };
    let dot = styled("\u{00B7}", dim(), ctx.color);

    format!(
        "{} {} {} deposits {} {} payments {} {} net {}",
        records.len(),
        noun,
        dot,
        styled_total(ctx, deposits),
        dot,
        styled_total(ctx, payments),
        dot,
        styled_total(ctx, net),
    )
}

fn total(records: &[Record], keep: fn(&Record) -> bool) -> Option<Decimal> {
    records
        .iter()
        .filter(|r| keep(r))
        .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.amount()))
}

fn styled_total(ctx: &UiContext, value: Option<Decimal>) -> String {
    match value {
        Some(value) => styled(
            &value.to_string(),
            amount_style(value.is_sign_negative()),
            ctx.color,
        ),
        None => styled("overflow", Badge::Warn.style(), ctx.color),
    }
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = vec![badge(ctx, Badge::Err, message)];
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }
    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
