//! Product generation.

use storefront::models::Thumbnail;

use crate::fixtures::ProductTemplate;

/// Generated product data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProduct {
    pub sku: String,
    pub upc: String,
    pub title: String,
    pub description: String,
    pub brand_name: String,
    pub model_name: String,
    pub category: String,
    pub thumbnail: Thumbnail,
}

/// Converts product templates into insertable records. Nothing is faked.
#[derive(Debug, Default)]
pub struct ProductGenerator;

impl ProductGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, template: &ProductTemplate) -> GeneratedProduct {
        GeneratedProduct {
            sku: template.sku.to_string(),
            upc: template.upc.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            brand_name: template.brand_name.to_string(),
            model_name: template.model_name.to_string(),
            category: template.category.to_string(),
            thumbnail: Thumbnail {
                mime_type: template.thumbnail.mime_type.to_string(),
                src: template.thumbnail.src.to_string(),
                width: template.thumbnail.width.to_string(),
                height: template.thumbnail.height.to_string(),
            },
        }
    }

    pub fn generate_batch(&self, templates: &[ProductTemplate]) -> Vec<GeneratedProduct> {
        templates.iter().map(|t| self.generate(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::PRODUCTS;

    #[test]
    fn test_generate_products() {
        let products = ProductGenerator::new().generate_batch(PRODUCTS);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sku, "SKU001");
        assert_eq!(products[1].upc, "UPC002");
        assert_eq!(products[1].model_name, "Model 2");
        assert_eq!(
            products[0].thumbnail.src,
            "https://dummyproduct1.com/thumbnail.jpg"
        );
        assert_eq!(products[0].thumbnail.mime_type, "image/jpeg");
    }
}
