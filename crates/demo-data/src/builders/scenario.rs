//! Fluent builder for the demo storefront scenario.

use std::time::Instant;

use rand::Rng;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::db::{SeedError, Seeder, TableCounts};
use crate::fixtures::{
    self, CustomerTemplate, OrganizationTemplate, ProductTemplate, SellerTemplate,
    VariantTemplate,
};
use crate::generators::{
    CustomerGenerator, GeneratedCustomer, GeneratedOrganization, GeneratedProduct,
    GeneratedSeller, GeneratedVariant, OrganizationGenerator, ProductGenerator, SellerGenerator,
    VariantGenerator,
};

/// Records generated for a scenario, not yet inserted.
#[derive(Debug, Clone)]
pub struct ScenarioData {
    pub organization: GeneratedOrganization,
    pub sellers: Vec<GeneratedSeller>,
    pub customers: Vec<GeneratedCustomer>,
    pub products: Vec<GeneratedProduct>,
    pub variants: Vec<GeneratedVariant>,
}

impl ScenarioData {
    /// Row counts a fresh database holds once this data is seeded.
    pub fn expected_counts(&self) -> TableCounts {
        TableCounts {
            organizations: 1,
            sellers: self.sellers.len() as i64,
            customers: self.customers.len() as i64,
            products: self.products.len() as i64,
            variants: self.variants.len() as i64,
        }
    }
}

/// A variant as inserted, with the ids it was linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededVariant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub seller_id: Uuid,
}

/// Result of building and seeding a scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub data: ScenarioData,
    pub organization_id: Uuid,
    pub seller_ids: Vec<Uuid>,
    pub customer_ids: Vec<Uuid>,
    pub product_ids: Vec<Uuid>,
    pub variants: Vec<SeededVariant>,
    /// Metrics from scenario generation (populated if metrics tracking enabled).
    pub metrics: Option<ScenarioMetrics>,
}

/// Timing metrics from scenario generation.
#[derive(Debug, Clone)]
pub struct ScenarioMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent seeding database (milliseconds).
    pub seeding_time_ms: u64,
}

/// Builder for the storefront demo scenario.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_metrics(true)
///     .build(&pool, &mut rng)
///     .await?;
/// ```
pub struct ScenarioBuilder {
    organization: OrganizationTemplate,
    sellers: Vec<SellerTemplate>,
    customers: Vec<CustomerTemplate>,
    products: Vec<ProductTemplate>,
    variants: Vec<VariantTemplate>,
    track_metrics: bool,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a builder populated with the demo fixtures.
    pub fn new() -> Self {
        Self {
            organization: fixtures::ORGANIZATION,
            sellers: fixtures::SELLERS.to_vec(),
            customers: fixtures::CUSTOMERS.to_vec(),
            products: fixtures::PRODUCTS.to_vec(),
            variants: fixtures::VARIANTS.to_vec(),
            track_metrics: false,
        }
    }

    pub fn with_sellers(mut self, sellers: Vec<SellerTemplate>) -> Self {
        self.sellers = sellers;
        self
    }

    /// Sets the variants. Their product and seller indices refer to the
    /// configured products and sellers.
    pub fn with_variants(mut self, variants: Vec<VariantTemplate>) -> Self {
        self.variants = variants;
        self
    }

    /// Enables timing metrics on the result.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Builds the scenario (generates data but doesn't seed database).
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<ScenarioData, SeedError> {
        let organization = OrganizationGenerator::new().generate(&self.organization, rng);
        let sellers = SellerGenerator::new().generate_batch(&self.sellers, rng);
        let customers = CustomerGenerator::new().generate_batch(&self.customers, rng)?;
        let products = ProductGenerator::new().generate_batch(&self.products);
        let variants = VariantGenerator::new().generate_batch(&self.variants);

        Ok(ScenarioData {
            organization,
            sellers,
            customers,
            products,
            variants,
        })
    }

    /// Generates the scenario and inserts it, parents before children.
    ///
    /// Inserts are not wrapped in a transaction: a failure leaves whatever
    /// was inserted before it.
    pub async fn build(
        self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        let gen_start = Instant::now();
        let data = self.build_data(rng)?;
        let generation_time_ms = gen_start.elapsed().as_millis() as u64;

        let seed_start = Instant::now();
        let seeder = Seeder::new(pool.clone());

        info!("Seeding organization...");
        let organization_id = seeder.seed_organization(&data.organization).await?;

        info!("Seeding {} sellers...", data.sellers.len());
        let mut seller_ids = Vec::with_capacity(data.sellers.len());
        for seller in &data.sellers {
            seller_ids.push(seeder.seed_seller(organization_id, seller).await?);
        }

        info!("Seeding {} customers...", data.customers.len());
        let mut customer_ids = Vec::with_capacity(data.customers.len());
        for customer in &data.customers {
            customer_ids.push(seeder.seed_customer(organization_id, customer).await?);
        }

        info!("Seeding {} products...", data.products.len());
        let mut product_ids = Vec::with_capacity(data.products.len());
        for product in &data.products {
            product_ids.push(seeder.seed_product(product).await?);
        }

        info!("Seeding {} variants...", data.variants.len());
        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            let product_id = resolve(&product_ids, variant.product_index, "product")?;
            let seller_id = resolve(&seller_ids, variant.seller_index, "seller")?;
            let id = seeder.seed_variant(product_id, seller_id, variant).await?;
            variants.push(SeededVariant {
                id,
                product_id,
                seller_id,
            });
        }

        let metrics = self.track_metrics.then(|| ScenarioMetrics {
            generation_time_ms,
            seeding_time_ms: seed_start.elapsed().as_millis() as u64,
        });

        Ok(ScenarioResult {
            data,
            organization_id,
            seller_ids,
            customer_ids,
            product_ids,
            variants,
            metrics,
        })
    }
}

/// Looks up the id inserted for the `index`-th generated `entity`.
fn resolve(ids: &[Uuid], index: usize, entity: &'static str) -> Result<Uuid, SeedError> {
    ids.get(index)
        .copied()
        .ok_or(SeedError::MissingReference { entity, index })
}
