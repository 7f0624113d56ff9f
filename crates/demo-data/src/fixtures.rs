//! Fixed templates for the demo storefront.
//!
//! Everything here is constant; fields that should look realistic (names,
//! emails, phone numbers) are filled in by the generators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront::models::Condition;

/// Template for the tenant root.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationTemplate {
    pub name: &'static str,
    pub webstore_url: &'static str,
}

/// Template for a seller belonging to the organization.
#[derive(Debug, Clone, Copy)]
pub struct SellerTemplate {
    pub name: &'static str,
    pub subdomain: &'static str,
    pub is_online: bool,
    pub enable_web_store: bool,
}

/// Template for a customer postal address.
#[derive(Debug, Clone, Copy)]
pub struct AddressTemplate {
    pub unit: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub postal_code: &'static str,
}

/// Template for a customer. The password is hashed at generation time.
#[derive(Debug, Clone, Copy)]
pub struct CustomerTemplate {
    pub password: &'static str,
    pub auth_token: &'static str,
    pub phone_number: &'static str,
    pub addresses: &'static [AddressTemplate],
}

/// Template for a product thumbnail.
#[derive(Debug, Clone, Copy)]
pub struct ThumbnailTemplate {
    pub mime_type: &'static str,
    pub src: &'static str,
    pub width: &'static str,
    pub height: &'static str,
}

/// Template for a catalogue product.
#[derive(Debug, Clone, Copy)]
pub struct ProductTemplate {
    pub sku: &'static str,
    pub upc: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub brand_name: &'static str,
    pub model_name: &'static str,
    pub category: &'static str,
    pub thumbnail: ThumbnailTemplate,
}

/// Template for a variant. Product and seller are indices into
/// [`PRODUCTS`] and [`SELLERS`].
#[derive(Debug, Clone, Copy)]
pub struct VariantTemplate {
    pub product: usize,
    pub seller: usize,
    pub condition: Condition,
    pub attributes: &'static [(&'static str, &'static str, &'static str)],
    pub price: Decimal,
    pub stock: i32,
}

pub const ORGANIZATION: OrganizationTemplate = OrganizationTemplate {
    name: "Dummy Organization",
    webstore_url: "https://dummyorganization.com",
};

pub const SELLERS: &[SellerTemplate] = &[
    SellerTemplate {
        name: "Dummy Seller 1",
        subdomain: "seller1",
        is_online: true,
        enable_web_store: true,
    },
    SellerTemplate {
        name: "Dummy Seller 2",
        subdomain: "seller2",
        is_online: true,
        enable_web_store: true,
    },
];

pub const CUSTOMERS: &[CustomerTemplate] = &[
    CustomerTemplate {
        password: "password789",
        auth_token: "authToken789",
        phone_number: "+15555555555",
        addresses: &[AddressTemplate {
            unit: "Apt 401",
            street: "Customer 1 Street",
            city: "Dummyville",
            state: "Dummy State",
            country: "Dummy Country",
            postal_code: "45678",
        }],
    },
    CustomerTemplate {
        password: "password012",
        auth_token: "authToken012",
        phone_number: "+17777777777",
        addresses: &[AddressTemplate {
            unit: "Apt 501",
            street: "Customer 2 Street",
            city: "Dummyville",
            state: "Dummy State",
            country: "Dummy Country",
            postal_code: "56789",
        }],
    },
];

pub const PRODUCTS: &[ProductTemplate] = &[
    ProductTemplate {
        sku: "SKU001",
        upc: "UPC001",
        title: "Dummy Product 1",
        description: "This is a dummy product 1",
        brand_name: "Dummy Brand",
        model_name: "Model 1",
        category: "Electronics",
        thumbnail: ThumbnailTemplate {
            mime_type: "image/jpeg",
            src: "https://dummyproduct1.com/thumbnail.jpg",
            width: "100",
            height: "100",
        },
    },
    ProductTemplate {
        sku: "SKU002",
        upc: "UPC002",
        title: "Dummy Product 2",
        description: "This is a dummy product 2",
        brand_name: "Dummy Brand",
        model_name: "Model 2",
        category: "Electronics",
        thumbnail: ThumbnailTemplate {
            mime_type: "image/jpeg",
            src: "https://dummyproduct2.com/thumbnail.jpg",
            width: "100",
            height: "100",
        },
    },
];

pub const VARIANTS: &[VariantTemplate] = &[
    VariantTemplate {
        product: 0,
        seller: 0,
        condition: Condition::New,
        attributes: &[("Color", "Red", "General"), ("Size", "Small", "General")],
        price: dec!(99.99),
        stock: 10,
    },
    VariantTemplate {
        product: 0,
        seller: 1,
        condition: Condition::New,
        attributes: &[("Color", "Blue", "General"), ("Size", "Large", "General")],
        price: dec!(89.99),
        stock: 5,
    },
    VariantTemplate {
        product: 1,
        seller: 0,
        condition: Condition::New,
        attributes: &[("Color", "Black", "General"), ("Size", "Medium", "General")],
        price: dec!(79.99),
        stock: 8,
    },
    VariantTemplate {
        product: 1,
        seller: 1,
        condition: Condition::New,
        attributes: &[
            ("Color", "Green", "General"),
            ("Size", "Extra Large", "General"),
        ],
        price: dec!(69.99),
        stock: 3,
    },
];
