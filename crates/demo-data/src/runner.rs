//! One complete seed run: configure, connect, reset, seed, disconnect.
//!
//! Every failure is logged at `error` and swallowed. The pool, once created,
//! is always closed before returning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::PgPool;
use tracing::{error, info};

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder, TableCounts};
use crate::reset_and_seed;

/// What a run accomplished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Row counts after a successful seed, `None` if the run failed.
    pub counts: Option<TableCounts>,
    /// Whether a pool was created at all.
    pub pool_opened: bool,
    /// Whether the pool was closed before returning.
    pub pool_closed: bool,
}

/// Runs the seed with configuration from the process environment.
pub async fn run_from_env() -> RunReport {
    run(|key| std::env::var(key).ok()).await
}

/// Runs the seed with configuration read through `lookup`.
pub async fn run(lookup: impl Fn(&str) -> Option<String>) -> RunReport {
    let (config, pool) = match connect(lookup) {
        Ok(connected) => connected,
        Err(e) => {
            error!("Error seeding data: {e}");
            return RunReport::default();
        }
    };

    let counts = match seed(&pool, &config).await {
        Ok(counts) => {
            info!("Data seeded successfully!");
            Some(counts)
        }
        Err(e) => {
            error!("Error seeding data: {e}");
            None
        }
    };

    pool.close().await;
    info!("Disconnected from database");

    RunReport {
        counts,
        pool_opened: true,
        pool_closed: pool.is_closed(),
    }
}

fn connect(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(SeedConfig, PgPool), SeedError> {
    let config = SeedConfig::from_lookup(lookup)?;
    info!("Connecting to database at {}", config.redacted_url());
    let pool = config.connect_lazy()?;
    Ok((config, pool))
}

async fn seed(pool: &PgPool, config: &SeedConfig) -> Result<TableCounts, SeedError> {
    if config.run_migrations {
        storefront::run_migrations(pool).await?;
    }

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed), // Reproducible data
        None => StdRng::from_entropy(),
    };

    let result = reset_and_seed(pool, &mut rng).await?;
    let counts = Seeder::new(pool.clone()).table_counts().await?;

    // Summary output
    info!("Seed completed!");
    info!("  Organization: {}", result.organization_id);
    info!("  Sellers: {}", result.seller_ids.len());
    info!("  Customers: {}", result.customer_ids.len());
    info!("  Products: {}", result.product_ids.len());
    info!("  Variants: {}", result.variants.len());
    info!("  Row counts: {counts}");
    if let Some(metrics) = &result.metrics {
        info!(
            "  Took {}ms generating, {}ms seeding",
            metrics.generation_time_ms, metrics.seeding_time_ms
        );
    }

    Ok(counts)
}
