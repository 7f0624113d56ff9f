//! Seller generation.

use fake::{Fake, faker::internet::en::SafeEmail};
use rand::Rng;

use storefront::models::ContactInfo;

use crate::fixtures::SellerTemplate;

/// Generated seller data ready for database insertion.
///
/// The owning organization is supplied at insert time.
#[derive(Debug, Clone)]
pub struct GeneratedSeller {
    pub name: String,
    pub subdomain: String,
    pub is_online: bool,
    pub enable_web_store: bool,
    pub contact_info: ContactInfo,
}

/// Fills seller templates with fake contact emails.
#[derive(Debug, Default)]
pub struct SellerGenerator;

impl SellerGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single seller.
    pub fn generate(&self, template: &SellerTemplate, rng: &mut impl Rng) -> GeneratedSeller {
        let email: String = SafeEmail().fake_with_rng(rng);

        GeneratedSeller {
            name: template.name.to_string(),
            subdomain: template.subdomain.to_string(),
            is_online: template.is_online,
            enable_web_store: template.enable_web_store,
            contact_info: ContactInfo::email(email),
        }
    }

    /// Generates one seller per template, preserving order.
    pub fn generate_batch(
        &self,
        templates: &[SellerTemplate],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedSeller> {
        templates.iter().map(|t| self.generate(t, rng)).collect()
    }
}
