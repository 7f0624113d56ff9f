//! Fluent builder APIs for demo scenarios.
//!
//! The [`ScenarioBuilder`] generates the demo storefront from fixtures and
//! inserts it, threading each parent id into its children.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioData, ScenarioMetrics, ScenarioResult, SeededVariant};
