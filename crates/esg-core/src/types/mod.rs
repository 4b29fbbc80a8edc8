//! Domain types shared across the pipeline.

pub mod aggregate;
pub mod dimension;
pub mod record;

pub use aggregate::{CompanyAggregate, ExtendedMetrics};
pub use dimension::{Dimension, DimensionHits};
pub use record::{NewsRecord, RecordScore, ScoredRecord};
