use crate::errors::AppError;
use crate::models::{Customer, Organization, Product, Seller, Table, Variant, VariantReference};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Counts the rows currently stored in `table`.
    pub async fn count_rows(&self, table: Table) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn get_organization(&self, id: Uuid) -> Result<Option<Organization>, AppError> {
        let organization = sqlx::query_as(
            r#"
            SELECT id, name, webstore_url, contact_info, created_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organization)
    }

    pub async fn get_seller(&self, id: Uuid) -> Result<Option<Seller>, AppError> {
        let seller = sqlx::query_as(
            r#"
            SELECT id, organization_id, name, subdomain, is_online, enable_web_store,
                   contact_info, created_at
            FROM sellers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(seller)
    }

    pub async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as(
            r#"
            SELECT id, organization_id, fname, lname, email, password_hash, auth_token,
                   phone_number, addresses, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as(
            r#"
            SELECT id, sku, upc, title, description, brand_name, model_name, category,
                   thumbnail, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn get_variant(&self, id: Uuid) -> Result<Option<Variant>, AppError> {
        let variant = sqlx::query_as(
            r#"
            SELECT id, product_id, seller_id, condition, attributes, price, stock, created_at
            FROM variants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(variant)
    }

    /// Lists the product and seller every stored variant points at.
    pub async fn variant_references(&self) -> Result<Vec<VariantReference>, AppError> {
        let references: Vec<VariantReference> = sqlx::query_as(
            r#"
            SELECT id AS variant_id, product_id, seller_id
            FROM variants
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(references)
    }
}
