//! Demo data for the storefront.
//!
//! This crate wipes the storefront tables and seeds a small, fixed tenant:
//! one organization with two sellers, two customers, two products and four
//! variants spread across both sellers. Names, emails and phone numbers are
//! faked; everything else comes from [`fixtures`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//!
//! let pool = SeedConfig::default().connect_lazy()?;
//! let result = reset_and_seed(&pool, &mut rand::thread_rng()).await?;
//! assert_eq!(result.variants.len(), 4);
//! ```
//!
//! Or run the whole thing, logging failures instead of returning them:
//!
//! ```rust,ignore
//! let report = demo_data::run_from_env().await;
//! assert!(report.pool_closed || !report.pool_opened);
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod fixtures;
pub mod generators;
mod runner;

use rand::Rng;
use sqlx::PgPool;

use crate::builders::{ScenarioBuilder, ScenarioResult};
use crate::db::{SeedError, Seeder};

pub use runner::{RunReport, run, run_from_env};

// Re-export core types from storefront crate
pub use storefront::models::{Condition, Table};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioData, ScenarioResult, SeededVariant};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder, TableCounts};
    pub use crate::generators::{
        CustomerGenerator, OrganizationGenerator, ProductGenerator, SellerGenerator,
        VariantGenerator,
    };
    pub use crate::{RunReport, reset_and_seed, run, run_from_env};
    pub use crate::{Condition, Table};
}

/// Empties every storefront table, then seeds the demo scenario.
///
/// Any failed statement aborts the run and is returned as is; nothing is
/// rolled back.
pub async fn reset_and_seed(
    pool: &PgPool,
    rng: &mut impl Rng,
) -> Result<ScenarioResult, SeedError> {
    Seeder::new(pool.clone()).clear_all().await?;
    ScenarioBuilder::new()
        .with_metrics(true)
        .build(pool, rng)
        .await
}
