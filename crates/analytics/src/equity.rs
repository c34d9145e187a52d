// In crates/analytics/src/equity.rs

use crate::types::{EquityPoint, RecordOrder};
use core_types::TradeRecord;
use rust_decimal::Decimal;

/// Folds records into a cumulative net P&L curve, one point per trade. The
/// running balance saturates at the bounds of [`Decimal`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EquityCurveBuilder;

impl EquityCurveBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the full curve. `order` states how `records` is arranged; the
    /// fold itself always runs oldest to newest.
    pub fn build(&self, records: &[TradeRecord], order: RecordOrder) -> Vec<EquityPoint> {
        match order {
            RecordOrder::Chronological => fold(records.iter()),
            RecordOrder::NewestFirst => fold(records.iter().rev()),
        }
    }
}

fn fold<'a>(records: impl Iterator<Item = &'a TradeRecord>) -> Vec<EquityPoint> {
    records
        .zip(1u64..)
        .scan(Decimal::ZERO, |balance, (record, index)| {
            *balance = balance.saturating_add(record.net_pnl);
            Some(EquityPoint {
                index,
                balance: *balance,
                pnl: record.net_pnl,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricsCalculator;
    use core_types::{Side, TradeDraft};
    use rust_decimal_macros::dec;

    fn records() -> Vec<TradeRecord> {
        let calc = MetricsCalculator::new();
        vec![
            calc.compute(
                TradeDraft::new("A", Side::Buy, 10, dec!(100), dec!(110)).with_brokerage(dec!(5)),
            )
            .unwrap(),
            calc.compute(
                TradeDraft::new("B", Side::Buy, 20, dec!(50), dec!(45)).with_brokerage(dec!(1)),
            )
            .unwrap(),
        ]
    }

    fn point(index: u64, balance: Decimal, pnl: Decimal) -> EquityPoint {
        EquityPoint { index, balance, pnl }
    }

    #[test]
    fn chronological_input_is_folded_as_given() {
        let curve = EquityCurveBuilder::new().build(&records(), RecordOrder::Chronological);
        assert_eq!(
            curve,
            vec![point(1, dec!(95), dec!(95)), point(2, dec!(-6), dec!(-101))]
        );
    }

    #[test]
    fn newest_first_input_is_reversed_before_folding() {
        let mut newest_first = records();
        newest_first.reverse();
        let curve = EquityCurveBuilder::new().build(&newest_first, RecordOrder::NewestFirst);
        assert_eq!(
            curve,
            vec![point(1, dec!(95), dec!(95)), point(2, dec!(-6), dec!(-101))]
        );
    }

    #[test]
    fn empty_input_gives_empty_curve() {
        assert!(EquityCurveBuilder::new().build(&[], RecordOrder::NewestFirst).is_empty());
    }

    #[test]
    fn points_serialize_with_chart_field_names() {
        let json = serde_json::to_value(point(1, dec!(95), dec!(95))).unwrap();
        assert_eq!(json["trade"], 1);
        assert_eq!(json["balance"], "95");
    }

    #[test]
    fn balance_saturates_instead_of_overflowing() {
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let calc = MetricsCalculator::new();
        let big_win = || {
            calc.compute(TradeDraft::new("BIG", Side::Buy, 1, Decimal::ZERO, huge))
                .unwrap()
        };
        let curve = EquityCurveBuilder::new()
            .build(&[big_win(), big_win()], RecordOrder::Chronological);
        assert_eq!(curve[0].balance, huge);
        assert_eq!(curve[1].balance, Decimal::MAX);
        assert_eq!(curve[1].pnl, huge);
    }
}
