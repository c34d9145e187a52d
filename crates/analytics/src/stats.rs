// In crates/analytics/src/stats.rs

use crate::types::JournalStats;
use core_types::{TradeRecord, TradeResult};
use rust_decimal::Decimal;

/// Reduces a collection of records to [`JournalStats`].
///
/// Every figure is a sum or a count, so the result does not depend on the
/// order of the input. Sums saturate at the bounds of [`Decimal`] rather
/// than overflow.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, records: &[TradeRecord]) -> JournalStats {
        let mut stats = JournalStats::new();
        if records.is_empty() {
            return stats;
        }

        // 1. Counts and sums, in a single pass.
        for record in records {
            match record.result {
                TradeResult::Profit => {
                    stats.winning_trades += 1;
                    stats.total_profit = stats.total_profit.saturating_add(record.net_pnl);
                }
                TradeResult::Loss => {
                    stats.losing_trades += 1;
                    stats.total_loss = stats.total_loss.saturating_add(record.net_pnl.abs());
                }
                TradeResult::Breakeven => {}
            }
            stats.net_pnl = stats.net_pnl.saturating_add(record.net_pnl);
        }
        stats.total_trades = records.len() as u64;

        // 2. Win ratio
        stats.win_ratio = Decimal::from(stats.winning_trades) / Decimal::from(stats.total_trades)
            * Decimal::ONE_HUNDRED;

        // 3. Averages, zero when the side is empty.
        if stats.winning_trades > 0 {
            stats.avg_profit = stats.total_profit / Decimal::from(stats.winning_trades);
        }
        if stats.losing_trades > 0 {
            stats.avg_loss = stats.total_loss / Decimal::from(stats.losing_trades);
        }

        // 4. Profit factor, capped at Decimal::MAX when the losses are too
        // small to divide by.
        let divisor = if stats.total_loss.is_zero() {
            Decimal::ONE
        } else {
            stats.total_loss
        };
        stats.profit_factor = stats
            .total_profit
            .checked_div(divisor)
            .unwrap_or(Decimal::MAX);

        stats
    }
}
