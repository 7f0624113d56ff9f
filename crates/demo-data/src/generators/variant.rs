//! Variant generation.

use rust_decimal::Decimal;

use storefront::models::{Condition, VariantAttribute};

use crate::fixtures::VariantTemplate;

/// Generated variant data ready for database insertion.
///
/// `product_index` and `seller_index` point into the products and sellers
/// generated in the same scenario; they are resolved to ids once those rows
/// have been inserted.
#[derive(Debug, Clone)]
pub struct GeneratedVariant {
    pub product_index: usize,
    pub seller_index: usize,
    pub condition: Condition,
    pub attributes: Vec<VariantAttribute>,
    pub price: Decimal,
    pub stock: i32,
}

/// Converts variant templates into insertable records.
#[derive(Debug, Default)]
pub struct VariantGenerator;

impl VariantGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, template: &VariantTemplate) -> GeneratedVariant {
        GeneratedVariant {
            product_index: template.product,
            seller_index: template.seller,
            condition: template.condition,
            attributes: template
                .attributes
                .iter()
                .map(|&(name, value, group)| VariantAttribute::new(name, value, group))
                .collect(),
            price: template.price,
            stock: template.stock,
        }
    }

    pub fn generate_batch(&self, templates: &[VariantTemplate]) -> Vec<GeneratedVariant> {
        templates.iter().map(|t| self.generate(t)).collect()
    }
}
