use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use time::OffsetDateTime;
use uuid::Uuid;

/// Every table the storefront schema defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Transactions,
    Reviews,
    Variants,
    Products,
    Sellers,
    Customers,
    Orders,
    PaymentMethods,
    Discounts,
    CartItems,
    Employees,
    Roles,
    Organizations,
}

impl Table {
    /// Order in which tables must be emptied so no delete trips a foreign key.
    pub const RESET_ORDER: [Table; 13] = [
        Table::Transactions,
        Table::Reviews,
        Table::Variants,
        Table::Products,
        Table::Sellers,
        Table::Customers,
        Table::Orders,
        Table::PaymentMethods,
        Table::Discounts,
        Table::CartItems,
        Table::Employees,
        Table::Roles,
        Table::Organizations,
    ];

    /// Tables the demo seed writes rows into.
    pub const SEEDED: [Table; 5] = [
        Table::Organizations,
        Table::Sellers,
        Table::Customers,
        Table::Products,
        Table::Variants,
    ];

    /// Returns the SQL table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Transactions => "transactions",
            Table::Reviews => "reviews",
            Table::Variants => "variants",
            Table::Products => "products",
            Table::Sellers => "sellers",
            Table::Customers => "customers",
            Table::Orders => "orders",
            Table::PaymentMethods => "payment_methods",
            Table::Discounts => "discounts",
            Table::CartItems => "cart_items",
            Table::Employees => "employees",
            Table::Roles => "roles",
            Table::Organizations => "organizations",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form contact details stored as JSON on organizations and sellers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactInfo {
    pub fn phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            email: None,
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            phone: None,
            email: Some(email.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub webstore_url: Option<String>,
    pub contact_info: Json<ContactInfo>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seller {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub subdomain: String,
    pub is_online: bool,
    pub enable_web_store: bool,
    pub contact_info: Json<ContactInfo>,
    pub created_at: OffsetDateTime,
}

/// Postal address embedded in a customer's address list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub unit: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password_hash: String,
    pub auth_token: Option<String>,
    pub phone_number: Option<String>,
    pub addresses: Json<Vec<Address>>,
    pub created_at: OffsetDateTime,
}

/// Image metadata for a product thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(rename = "type")]
    pub mime_type: String,
    pub src: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub upc: String,
    pub title: String,
    pub description: Option<String>,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<Json<Thumbnail>>,
    pub created_at: OffsetDateTime,
}

/// Condition a variant is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
}

impl Condition {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
        }
    }
}

/// A name/value pair shown on a variant, grouped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttribute {
    pub name: String,
    pub value: String,
    pub group: String,
}

impl VariantAttribute {
    pub fn new(name: &str, value: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            group: group.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Variant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub seller_id: Uuid,
    pub condition: String,
    pub attributes: Json<Vec<VariantAttribute>>,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: OffsetDateTime,
}

/// A variant's foreign keys, used to check references after a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct VariantReference {
    pub variant_id: Uuid,
    pub product_id: Uuid,
    pub seller_id: Uuid,
}
