// In crates/journal/src/export.rs

use crate::Result;
use core_types::TradeRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fs;
use std::io;
use std::path::Path;

pub const LEDGER_HEADER: [&str; 13] = [
    "Date",
    "Symbol",
    "Market",
    "Side",
    "Quantity",
    "Entry Price",
    "Exit Price",
    "Brokerage",
    "Net P&L",
    "P&L %",
    "Result",
    "Strategy",
    "Remarks",
];

/// Formats a value with two decimal places, rounding half away from zero.
/// Anything that rounds to zero prints unsigned.
pub fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return format!("{:.2}", Decimal::ZERO);
    }
    format!("{rounded:.2}")
}

/// Writes the ledger as CSV, one row per record in the order given.
pub fn export_csv<W: io::Write>(records: &[TradeRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(LEDGER_HEADER)?;

    for r in records {
        let row = [
            r.draft.date.to_string(),
            r.draft.symbol.to_string(),
            r.draft.market_type.label().to_string(),
            r.draft.side.label().to_string(),
            r.draft.quantity.to_string(),
            two_places(r.draft.entry_price),
            two_places(r.draft.exit_price),
            two_places(r.draft.brokerage),
            two_places(r.net_pnl),
            two_places(r.pnl_percentage),
            r.result.label().to_string(),
            r.draft.strategy.clone(),
            r.draft.remarks.clone(),
        ];
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the ledger to a file, creating parent directories as needed.
pub fn export_csv_to_path(records: &[TradeRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    export_csv(records, fs::File::create(path)?)?;
    tracing::info!(path = %path.display(), rows = records.len(), "Exported ledger.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::{MetricsCalculator, SequentialIdGenerator};
    use chrono::NaiveDate;
    use core_types::{MarketType, Side, TradeDraft};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn calculator() -> MetricsCalculator {
        MetricsCalculator::with_id_generator(Arc::new(SequentialIdGenerator::default()))
    }

    #[test]
    fn ledger_rows_follow_the_header() {
        let record = calculator()
            .compute(
                TradeDraft::new("banknifty", Side::Sell, 5, dec!(200), dec!(180))
                    .with_brokerage(dec!(2))
                    .with_market_type(MarketType::FuturesOptions)
                    .with_date(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap())
                    .with_strategy("gap fade")
                    .with_remarks("held, then covered"),
            )
            .unwrap();

        let mut out = Vec::new();
        export_csv(&[record], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], LEDGER_HEADER.join(","));
        assert_eq!(
            lines[1],
            concat!(
                "2024-02-09,BANKNIFTY,F&O,Sell,5,200.00,180.00,2.00,98.00,9.80,PROFIT,",
                "gap fade,\"held, then covered\""
            )
        );
    }

    #[test]
    fn money_columns_round_half_away_from_zero() {
        assert_eq!(two_places(dec!(1.235)), "1.24");
        assert_eq!(two_places(dec!(1.239)), "1.24");
        assert_eq!(two_places(dec!(1.234)), "1.23");
        assert_eq!(two_places(dec!(-1.235)), "-1.24");
        assert_eq!(two_places(dec!(7)), "7.00");
        assert_eq!(two_places(dec!(-0.004)), "0.00");

        let record = calculator()
            .compute(
                TradeDraft::new("itc", Side::Buy, 1, dec!(10.005), dec!(11.239))
                    .with_brokerage(dec!(0.004)),
            )
            .unwrap();
        let mut out = Vec::new();
        export_csv(&[record], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        // Entry, exit, brokerage and net P&L (1.234 - 0.004 = 1.23).
        assert_eq!(row[5..9], ["10.01", "11.24", "0.00", "1.23"]);
    }

    #[test]
    fn empty_journal_exports_header_only() {
        let mut out = Vec::new();
        export_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
