//! Entity generators for demo data.
//!
//! Each generator turns a fixture template into a record ready for insertion:
//! - [`OrganizationGenerator`]: fake contact phone
//! - [`SellerGenerator`]: fake contact email
//! - [`CustomerGenerator`]: fake names and email, hashed password
//! - [`ProductGenerator`]: fixture values only
//! - [`VariantGenerator`]: fixture values, product and seller by index

pub mod customer;
pub mod organization;
pub mod product;
pub mod seller;
pub mod variant;

pub use customer::{CustomerGenerator, GeneratedCustomer};
pub use organization::{GeneratedOrganization, OrganizationGenerator};
pub use product::{GeneratedProduct, ProductGenerator};
pub use seller::{GeneratedSeller, SellerGenerator};
pub use variant::{GeneratedVariant, VariantGenerator};
