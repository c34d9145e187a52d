// In app/src/render.rs

use core_types::TradeRecord;
use journal::two_places;
use rust_decimal::Decimal;
use std::fmt::Write;

/// One-line confirmation for a freshly recorded trade.
pub fn summary(record: &TradeRecord) -> String {
    format!(
        "{} {} {} x{} @ {} -> {}: net {} ({}%) {}",
        record.id,
        record.draft.side.label(),
        record.draft.symbol,
        record.draft.quantity,
        two_places(record.draft.entry_price),
        two_places(record.draft.exit_price),
        signed(record.net_pnl),
        two_places(record.pnl_percentage),
        record.result.label(),
    )
}

/// Fixed-width ledger, rows in the order given.
pub fn ledger(records: &[TradeRecord]) -> String {
    if records.is_empty() {
        return "No trades recorded.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<36}  {:<10}  {:<12}  {:<6}  {:<4}  {:>8}  {:>10}  {:>10}  {:>12}  {:<9}",
        "ID", "DATE", "SYMBOL", "MARKET", "SIDE", "QTY", "ENTRY", "EXIT", "NET P&L", "RESULT"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<36}  {:<10}  {:<12}  {:<6}  {:<4}  {:>8}  {:>10}  {:>10}  {:>12}  {:<9}",
            r.id.as_str(),
            r.draft.date.to_string(),
            r.draft.symbol.as_str(),
            r.draft.market_type.label(),
            r.draft.side.label(),
            r.draft.quantity,
            two_places(r.draft.entry_price),
            two_places(r.draft.exit_price),
            signed(r.net_pnl),
            r.result.label(),
        );
    }
    out
}

fn signed(value: Decimal) -> String {
    let text = two_places(value);
    if text.starts_with('-') {
        text
    } else {
        format!("+{text}")
    }
}
