// In crates/core-types/src/types.rs

use crate::{Error, Result};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An instrument ticker, stored upper-cased (e.g., "RELIANCE").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The permanent identifier of a journal record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(pub String);

impl TradeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TradeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The side of the opening leg of a round-trip trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    /// A short round trip: sold first, bought back on exit.
    Sell,
}

impl Side {
    /// +1 when a rising price is profitable, -1 when a falling price is.
    pub fn direction_sign(self) -> Decimal {
        match self {
            Side::Buy => Decimal::ONE,
            Side::Sell => Decimal::NEGATIVE_ONE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "b" | "long" => Ok(Side::Buy),
            "sell" | "s" | "short" => Ok(Side::Sell),
            _ => Err(Error::UnknownVariant {
                kind: "side",
                value: s.to_string(),
            }),
        }
    }
}

/// The market segment a trade was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketType {
    #[default]
    Equity,
    #[serde(rename = "F&O")]
    FuturesOptions,
    Crypto,
    Forex,
}

impl MarketType {
    pub fn label(self) -> &'static str {
        match self {
            MarketType::Equity => "Equity",
            MarketType::FuturesOptions => "F&O",
            MarketType::Crypto => "Crypto",
            MarketType::Forex => "Forex",
        }
    }
}

impl FromStr for MarketType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equity" => Ok(MarketType::Equity),
            "f&o" | "fo" | "fno" => Ok(MarketType::FuturesOptions),
            "crypto" => Ok(MarketType::Crypto),
            "forex" | "fx" => Ok(MarketType::Forex),
            _ => Err(Error::UnknownVariant {
                kind: "market type",
                value: s.to_string(),
            }),
        }
    }
}

/// Holding-period classification of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TradeType {
    #[default]
    Intraday,
    Delivery,
    Swing,
    Scalping,
    Positional,
}

impl FromStr for TradeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intraday" => Ok(TradeType::Intraday),
            "delivery" => Ok(TradeType::Delivery),
            "swing" => Ok(TradeType::Swing),
            "scalping" => Ok(TradeType::Scalping),
            "positional" => Ok(TradeType::Positional),
            _ => Err(Error::UnknownVariant {
                kind: "trade type",
                value: s.to_string(),
            }),
        }
    }
}

/// Classification of a trade's net result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeResult {
    Profit,
    Loss,
    Breakeven,
}

impl TradeResult {
    pub fn label(self) -> &'static str {
        match self {
            TradeResult::Profit => "PROFIT",
            TradeResult::Loss => "LOSS",
            TradeResult::Breakeven => "BREAKEVEN",
        }
    }
}

fn default_timeframe() -> String {
    "5m".to_string()
}

/// A raw trade as entered by the user, before any derived values exist.
///
/// Only `side`, `quantity`, the two prices and `brokerage` take part in the
/// arithmetic. Everything else is carried through to the record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDraft {
    pub date: NaiveDate,
    pub symbol: Symbol,
    pub market_type: MarketType,
    #[serde(rename = "orderType")]
    pub side: Side,
    pub trade_type: TradeType,
    pub quantity: u64,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    #[serde(default)]
    pub brokerage: Decimal,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub remarks: String,
}

impl TradeDraft {
    /// Creates a draft dated today with the journal's default metadata.
    pub fn new(
        symbol: impl AsRef<str>,
        side: Side,
        quantity: u64,
        entry_price: Decimal,
        exit_price: Decimal,
    ) -> Self {
        Self {
            date: Local::now().date_naive(),
            symbol: Symbol::new(symbol),
            market_type: MarketType::default(),
            side,
            trade_type: TradeType::default(),
            quantity,
            entry_price,
            exit_price,
            brokerage: Decimal::ZERO,
            timeframe: default_timeframe(),
            strategy: String::new(),
            remarks: String::new(),
        }
    }

    pub fn with_brokerage(mut self, brokerage: Decimal) -> Self {
        self.brokerage = brokerage;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_market_type(mut self, market_type: MarketType) -> Self {
        self.market_type = market_type;
        self
    }

    pub fn with_trade_type(mut self, trade_type: TradeType) -> Self {
        self.trade_type = trade_type;
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }
}

/// A fully valued journal entry.
///
/// Every derived field is fixed when the record is created and travels with
/// it through storage, so a restored record is never recomputed. Records are
/// self-contained: nothing in one refers to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: TradeId,
    #[serde(flatten)]
    pub draft: TradeDraft,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    #[serde(rename = "grossPnL")]
    pub gross_pnl: Decimal,
    #[serde(rename = "netPnL")]
    pub net_pnl: Decimal,
    pub pnl_percentage: Decimal,
    pub result: TradeResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn symbol_is_trimmed_and_upper_cased() {
        assert_eq!(Symbol::new("  reliance ").as_str(), "RELIANCE");
    }

    #[test]
    fn side_parses_common_spellings() {
        assert_eq!("BUY".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("short".parse::<Side>().unwrap(), Side::Sell);
        assert!(matches!(
            "hold".parse::<Side>(),
            Err(Error::UnknownVariant { kind: "side", .. })
        ));
    }

    #[test]
    fn direction_sign_matches_side() {
        assert_eq!(Side::Buy.direction_sign(), dec!(1));
        assert_eq!(Side::Sell.direction_sign(), dec!(-1));
    }

    #[test]
    fn enums_use_journal_document_names() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"Sell\"");
        assert_eq!(
            serde_json::to_string(&MarketType::FuturesOptions).unwrap(),
            "\"F&O\""
        );
        assert_eq!(
            serde_json::to_string(&TradeResult::Breakeven).unwrap(),
            "\"BREAKEVEN\""
        );
        assert_eq!("fno".parse::<MarketType>().unwrap(), MarketType::FuturesOptions);
        assert_eq!("Swing".parse::<TradeType>().unwrap(), TradeType::Swing);
    }

    #[test]
    fn draft_defaults_follow_entry_form() {
        let draft = TradeDraft::new("infy", Side::Buy, 10, dec!(100), dec!(110));
        assert_eq!(draft.symbol.as_str(), "INFY");
        assert_eq!(draft.market_type, MarketType::Equity);
        assert_eq!(draft.trade_type, TradeType::Intraday);
        assert_eq!(draft.timeframe, "5m");
        assert_eq!(draft.brokerage, Decimal::ZERO);
        assert!(draft.strategy.is_empty() && draft.remarks.is_empty());
    }

    #[test]
    fn draft_reads_legacy_numeric_document() {
        let json = r#"{
            "date": "2024-03-01",
            "symbol": "TCS",
            "marketType": "Equity",
            "orderType": "Buy",
            "tradeType": "Swing",
            "quantity": 4,
            "entryPrice": 3500,
            "exitPrice": 3550.5,
            "brokerage": 20
        }"#;
        let draft: TradeDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.quantity, 4);
        assert_eq!(draft.entry_price, dec!(3500));
        assert_eq!(draft.exit_price, dec!(3550.5));
        assert_eq!(draft.timeframe, "5m");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
