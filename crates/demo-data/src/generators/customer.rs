//! Customer generation with hashed credentials.

use fake::{
    Fake,
    faker::internet::en::SafeEmail,
    faker::name::en::{FirstName, LastName},
};
use rand::Rng;

use storefront::errors::AppError;
use storefront::models::Address;

use crate::fixtures::{AddressTemplate, CustomerTemplate};

/// Generated customer data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCustomer {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password_hash: String,
    pub auth_token: String,
    pub phone_number: String,
    pub addresses: Vec<Address>,
}

/// Generates customers with fake names and emails.
#[derive(Debug, Default)]
pub struct CustomerGenerator;

impl CustomerGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single customer.
    ///
    /// Fails only if the password cannot be hashed.
    pub fn generate(
        &self,
        template: &CustomerTemplate,
        rng: &mut impl Rng,
    ) -> Result<GeneratedCustomer, AppError> {
        let fname: String = FirstName().fake_with_rng(rng);
        let lname: String = LastName().fake_with_rng(rng);
        let email: String = SafeEmail().fake_with_rng(rng);

        // Same algorithm the storefront verifies logins with
        let password_hash = storefront::auth::hash_password(template.password)?;

        Ok(GeneratedCustomer {
            fname,
            lname,
            email,
            password_hash,
            auth_token: template.auth_token.to_string(),
            phone_number: template.phone_number.to_string(),
            addresses: template.addresses.iter().map(to_address).collect(),
        })
    }

    /// Generates one customer per template, preserving order.
    pub fn generate_batch(
        &self,
        templates: &[CustomerTemplate],
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedCustomer>, AppError> {
        templates.iter().map(|t| self.generate(t, rng)).collect()
    }
}

fn to_address(template: &AddressTemplate) -> Address {
    Address {
        unit: template.unit.to_string(),
        street: template.street.to_string(),
        city: template.city.to_string(),
        state: template.state.to_string(),
        country: template.country.to_string(),
        postal_code: template.postal_code.to_string(),
    }
}
