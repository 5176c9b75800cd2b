//! Definition-source aggregation.

pub mod aggregator;

pub use aggregator::DefinitionAggregator;
