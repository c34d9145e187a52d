// In crates/journal/src/lib.rs

use analytics::{
    EquityCurveBuilder, EquityPoint, JournalStats, MetricsCalculator, RecordOrder, StatsAggregator,
};
use core_types::{TradeDraft, TradeId, TradeRecord};
use std::collections::HashSet;

pub mod error;
pub mod export;
pub mod store;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use export::{LEDGER_HEADER, export_csv, export_csv_to_path, two_places};
pub use store::JsonStore;

/// The in-memory trade journal.
///
/// Owns the record collection, newest entry first. Records are only ever
/// added whole or removed whole; callers get shared references, so a stored
/// record cannot be edited in place. Statistics and the equity curve are
/// recomputed from the collection on every call.
#[derive(Debug)]
pub struct Journal {
    records: Vec<TradeRecord>,
    calculator: MetricsCalculator,
}

impl Journal {
    pub fn new(calculator: MetricsCalculator) -> Self {
        Self {
            records: Vec::new(),
            calculator,
        }
    }

    /// Restores a previously saved collection as-is. Derived fields are
    /// trusted and not recomputed.
    pub fn from_records(calculator: MetricsCalculator, records: Vec<TradeRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, calculator })
    }

    /// Values `draft` and puts the resulting record at the front of the journal.
    pub fn record(&mut self, draft: TradeDraft) -> Result<&TradeRecord> {
        let record = self.calculator.compute(draft).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected trade entry.");
        })?;
        if self.get(&record.id).is_some() {
            return Err(Error::DuplicateId(record.id));
        }

        tracing::info!(
            trade_id = %record.id,
            symbol = %record.draft.symbol,
            net_pnl = %record.net_pnl,
            result = record.result.label(),
            "Recorded trade."
        );
        self.records.insert(0, record);
        Ok(&self.records[0])
    }

    /// Removes the record with exactly this id.
    pub fn delete(&mut self, id: &TradeId) -> Result<TradeRecord> {
        let position = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let removed = self.records.remove(position);
        tracing::info!(trade_id = %removed.id, "Deleted trade.");
        Ok(removed)
    }

    /// Finds the single record whose id is `needle` or starts with it. A
    /// blank needle matches nothing.
    pub fn resolve_id(&self, needle: &str) -> Result<TradeId> {
        if needle.trim().is_empty() {
            return Err(Error::NotFound(needle.to_string()));
        }
        if let Some(record) = self.records.iter().find(|r| r.id.as_str() == needle) {
            return Ok(record.id.clone());
        }
        let mut matches = self.records.iter().filter(|r| r.id.as_str().starts_with(needle));
        match (matches.next(), matches.count()) {
            (None, _) => Err(Error::NotFound(needle.to_string())),
            (Some(record), 0) => Ok(record.id.clone()),
            (Some(_), rest) => Err(Error::AmbiguousId {
                prefix: needle.to_string(),
                matches: rest + 1,
            }),
        }
    }

    pub fn get(&self, id: &TradeId) -> Option<&TradeRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// All records, newest first.
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> JournalStats {
        StatsAggregator::new().compute(&self.records)
    }

    pub fn equity_curve(&self) -> Vec<EquityPoint> {
        EquityCurveBuilder::new().build(&self.records, RecordOrder::NewestFirst)
    }

    pub fn into_records(self) -> Vec<TradeRecord> {
        self.records
    }
}
