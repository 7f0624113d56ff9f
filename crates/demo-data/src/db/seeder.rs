//! Database seeding utilities.

use sqlx::{PgPool, types::Json};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ConfigError;
use crate::generators::{
    GeneratedCustomer, GeneratedOrganization, GeneratedProduct, GeneratedSeller, GeneratedVariant,
};
use storefront::database::Database;
use storefront::errors::AppError;
use storefront::models::Table;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Storefront error: {0}")]
    Storefront(#[from] AppError),
    #[error("No {entity} at index {index} to reference")]
    MissingReference { entity: &'static str, index: usize },
}

/// Row counts of the tables the seed writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub organizations: i64,
    pub sellers: i64,
    pub customers: i64,
    pub products: i64,
    pub variants: i64,
}

impl std::fmt::Display for TableCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "organizations={} sellers={} customers={} products={} variants={}",
            self.organizations, self.sellers, self.customers, self.products, self.variants
        )
    }
}

/// Database seeder for inserting generated demo data.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clears every storefront table.
    ///
    /// **WARNING**: This deletes all data from the tables. The first failing
    /// delete aborts the reset.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all storefront data...");

        // Order matters due to foreign key constraints
        for table in Table::RESET_ORDER {
            let result = sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&self.pool)
                .await?;
            debug!(%table, rows = result.rows_affected(), "Cleared table");
        }

        info!("All data cleared");
        Ok(())
    }

    /// Inserts the organization and returns its id.
    pub async fn seed_organization(
        &self,
        organization: &GeneratedOrganization,
    ) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO organizations (name, webstore_url, contact_info)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&organization.name)
        .bind(&organization.webstore_url)
        .bind(Json(&organization.contact_info))
        .fetch_one(&self.pool)
        .await?;

        debug!(%id, name = %organization.name, "Seeded organization");
        Ok(id)
    }

    /// Inserts a seller under `organization_id` and returns its id.
    pub async fn seed_seller(
        &self,
        organization_id: Uuid,
        seller: &GeneratedSeller,
    ) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO sellers (organization_id, name, subdomain, is_online, enable_web_store, contact_info)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(organization_id)
        .bind(&seller.name)
        .bind(&seller.subdomain)
        .bind(seller.is_online)
        .bind(seller.enable_web_store)
        .bind(Json(&seller.contact_info))
        .fetch_one(&self.pool)
        .await?;

        debug!(%id, subdomain = %seller.subdomain, "Seeded seller");
        Ok(id)
    }

    /// Inserts a customer under `organization_id` and returns its id.
    pub async fn seed_customer(
        &self,
        organization_id: Uuid,
        customer: &GeneratedCustomer,
    ) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO customers (
                organization_id, fname, lname, email, password_hash,
                auth_token, phone_number, addresses
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(organization_id)
        .bind(&customer.fname)
        .bind(&customer.lname)
        .bind(&customer.email)
        .bind(&customer.password_hash)
        .bind(&customer.auth_token)
        .bind(&customer.phone_number)
        .bind(Json(&customer.addresses))
        .fetch_one(&self.pool)
        .await?;

        debug!(%id, email = %customer.email, "Seeded customer");
        Ok(id)
    }

    /// Inserts a product and returns its id.
    pub async fn seed_product(&self, product: &GeneratedProduct) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO products (
                sku, upc, title, description, brand_name, model_name, category, thumbnail
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&product.sku)
        .bind(&product.upc)
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.brand_name)
        .bind(&product.model_name)
        .bind(&product.category)
        .bind(Json(&product.thumbnail))
        .fetch_one(&self.pool)
        .await?;

        debug!(%id, sku = %product.sku, "Seeded product");
        Ok(id)
    }

    /// Inserts a variant of `product_id` offered by `seller_id` and returns its id.
    pub async fn seed_variant(
        &self,
        product_id: Uuid,
        seller_id: Uuid,
        variant: &GeneratedVariant,
    ) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO variants (product_id, seller_id, condition, attributes, price, stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(product_id)
        .bind(seller_id)
        .bind(variant.condition.as_str())
        .bind(Json(&variant.attributes))
        .bind(variant.price)
        .bind(variant.stock)
        .fetch_one(&self.pool)
        .await?;

        debug!(%id, %product_id, %seller_id, "Seeded variant");
        Ok(id)
    }

    /// Counts the rows in every seeded table.
    pub async fn table_counts(&self) -> Result<TableCounts, SeedError> {
        let db = Database::new(self.pool.clone());

        Ok(TableCounts {
            organizations: db.count_rows(Table::Organizations).await?,
            sellers: db.count_rows(Table::Sellers).await?,
            customers: db.count_rows(Table::Customers).await?,
            products: db.count_rows(Table::Products).await?,
            variants: db.count_rows(Table::Variants).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_counts_display() {
        let counts = TableCounts {
            organizations: 1,
            sellers: 2,
            customers: 2,
            products: 2,
            variants: 4,
        };
        assert_eq!(
            counts.to_string(),
            "organizations=1 sellers=2 customers=2 products=2 variants=4"
        );
    }

    #[test]
    fn test_missing_reference_message() {
        let err = SeedError::MissingReference {
            entity: "product",
            index: 7,
        };
        assert_eq!(err.to_string(), "No product at index 7 to reference");
    }
}
