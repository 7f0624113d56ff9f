//! Organization generation.

use fake::{Fake, faker::phone_number::en::PhoneNumber};
use rand::Rng;

use storefront::models::ContactInfo;

use crate::fixtures::OrganizationTemplate;

/// Generated organization data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedOrganization {
    pub name: String,
    pub webstore_url: String,
    pub contact_info: ContactInfo,
}

/// Fills an organization template with a fake contact phone number.
#[derive(Debug, Default)]
pub struct OrganizationGenerator;

impl OrganizationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates the organization described by `template`.
    pub fn generate(
        &self,
        template: &OrganizationTemplate,
        rng: &mut impl Rng,
    ) -> GeneratedOrganization {
        let phone: String = PhoneNumber().fake_with_rng(rng);

        GeneratedOrganization {
            name: template.name.to_string(),
            webstore_url: template.webstore_url.to_string(),
            contact_info: ContactInfo::phone(phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ORGANIZATION;

    #[test]
    fn test_generate_organization() {
        let mut rng = rand::thread_rng();
        let org = OrganizationGenerator::new().generate(&ORGANIZATION, &mut rng);

        assert_eq!(org.name, "Dummy Organization");
        assert_eq!(org.webstore_url, "https://dummyorganization.com");
        assert!(org.contact_info.phone.is_some_and(|p| !p.is_empty()));
        assert!(org.contact_info.email.is_none());
    }
}
