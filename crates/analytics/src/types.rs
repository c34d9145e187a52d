// In crates/analytics/src/types.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary statistics over a collection of journal records.
///
/// A pure view: it is rebuilt from the records on every read and has no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    pub total_trades: u64,
    pub winning_trades: u64,
    pub losing_trades: u64,
    /// Winning trades as a percentage of all trades (0-100).
    pub win_ratio: Decimal,
    /// Sum of net P&L over winning trades.
    pub total_profit: Decimal,
    /// Sum of absolute net P&L over losing trades.
    pub total_loss: Decimal,
    #[serde(rename = "netPnL")]
    pub net_pnl: Decimal,
    pub avg_profit: Decimal,
    pub avg_loss: Decimal,
    /// Total profit over total loss, with the loss floored at 1 when nothing was lost.
    pub profit_factor: Decimal,
}

impl JournalStats {
    /// Creates an empty report with every value at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A point on the cumulative equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// 1-based position of the trade in chronological order.
    #[serde(rename = "trade")]
    pub index: u64,
    /// Running net P&L after this trade.
    pub balance: Decimal,
    /// This trade's own net P&L.
    pub pnl: Decimal,
}

/// The order in which a caller hands records to an order-sensitive computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrder {
    /// Oldest record first.
    Chronological,
    /// Most recent record first, as the journal stores them.
    NewestFirst,
}
