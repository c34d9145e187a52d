// In crates/analytics/src/metrics.rs

use crate::ids::{IdGenerator, UuidGenerator};
use core_types::{Error, Result, TradeDraft, TradeRecord, TradeResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Half-width of the band around zero in which a net result counts as breakeven.
pub const BREAKEVEN_EPSILON: Decimal = dec!(0.0000001);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Turns a raw [`TradeDraft`] into a fully valued [`TradeRecord`].
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    epsilon: Decimal,
    ids: Arc<dyn IdGenerator>,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCalculator {
    /// A calculator that issues random UUIDs and uses [`BREAKEVEN_EPSILON`].
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            epsilon: BREAKEVEN_EPSILON,
            ids,
        }
    }

    /// Overrides the breakeven band. Zero means only an exact zero is breakeven.
    pub fn with_epsilon(mut self, epsilon: Decimal) -> Result<Self> {
        if epsilon < Decimal::ZERO {
            return Err(Error::invalid_input(
                "breakevenEpsilon",
                format!("must not be negative, got {epsilon}"),
            ));
        }
        self.epsilon = epsilon;
        Ok(self)
    }

    pub fn epsilon(&self) -> Decimal {
        self.epsilon
    }

    /// Values a draft and stamps it with a fresh id.
    ///
    /// The draft is checked before anything is derived; a draft with a zero
    /// quantity or a negative price or brokerage is rejected whole. A draft
    /// whose derived values leave the decimal range fails with
    /// [`Error::OutOfRange`].
    pub fn compute(&self, draft: TradeDraft) -> Result<TradeRecord> {
        validate(&draft)?;

        let quantity = Decimal::from(draft.quantity);
        let buy_value = product(draft.entry_price, quantity, "entryPrice")?;
        let sell_value = product(draft.exit_price, quantity, "exitPrice")?;

        // (exit - entry) * qty == sell_value - buy_value, and both values are
        // non-negative so the difference cannot overflow.
        let gross_pnl = draft.side.direction_sign() * (sell_value - buy_value);
        let net_pnl = gross_pnl
            .checked_sub(draft.brokerage)
            .ok_or_else(|| Error::out_of_range("netPnL", "gross P&L minus brokerage"))?;

        let pnl_percentage = if buy_value.is_zero() {
            Decimal::ZERO
        } else {
            net_pnl
                .checked_div(buy_value)
                .and_then(|ratio| ratio.checked_mul(HUNDRED))
                .map(|pct| pct.normalize())
                .ok_or_else(|| Error::out_of_range("pnlPercentage", "net P&L over buy value"))?
        };

        Ok(TradeRecord {
            id: self.ids.next_id(),
            result: classify(net_pnl, self.epsilon),
            buy_value,
            sell_value,
            gross_pnl,
            net_pnl,
            pnl_percentage,
            draft,
        })
    }
}

/// Classifies a net result against a breakeven band of `epsilon` either side of zero.
pub fn classify(net_pnl: Decimal, epsilon: Decimal) -> TradeResult {
    if net_pnl > epsilon {
        TradeResult::Profit
    } else if net_pnl < -epsilon {
        TradeResult::Loss
    } else {
        TradeResult::Breakeven
    }
}

fn validate(draft: &TradeDraft) -> Result<()> {
    if draft.quantity == 0 {
        return Err(Error::invalid_input("quantity", "must be greater than zero"));
    }
    for (field, value) in [
        ("entryPrice", draft.entry_price),
        ("exitPrice", draft.exit_price),
        ("brokerage", draft.brokerage),
    ] {
        if value < Decimal::ZERO {
            return Err(Error::invalid_input(
                field,
                format!("must not be negative, got {value}"),
            ));
        }
    }
    Ok(())
}

fn product(price: Decimal, quantity: Decimal, field: &'static str) -> Result<Decimal> {
    price
        .checked_mul(quantity)
        .ok_or_else(|| Error::out_of_range(field, "price times quantity"))
}
