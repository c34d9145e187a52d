// In crates/analytics/src/lib.rs

//! The trade metrics and statistics engine.
//!
//! Three pure components, none of which hold state between calls:
//! [`MetricsCalculator`] values a single draft, [`StatsAggregator`] reduces a
//! collection of records to [`JournalStats`], and [`EquityCurveBuilder`] folds
//! records into a running balance.

pub mod equity;
pub mod ids;
pub mod metrics;
pub mod stats;
pub mod types;

pub use core_types::{Error, Result};
pub use equity::EquityCurveBuilder;
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use metrics::{BREAKEVEN_EPSILON, MetricsCalculator};
pub use stats::StatsAggregator;
pub use types::{EquityPoint, JournalStats, RecordOrder};
