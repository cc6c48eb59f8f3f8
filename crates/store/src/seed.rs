//! Fixed default catalog and company profile.
//!
//! The store is seeded with these values at process start; there is no
//! external load step. Seeded product ids are short numeric strings, which
//! is visible in admin URLs but otherwise meaningless.

use chrono::Utc;
use rust_decimal::Decimal;

use vetx_core::{Company, Product, ProductId};

/// The default company profile.
#[must_use]
pub fn default_company() -> Company {
    Company {
        name: "VET_X PHARMA".to_string(),
        founder: "Haresh L Kanetiya".to_string(),
        description: "Premium Veterinary Pharmaceuticals - Quality medicines trusted by \
                      veterinary professionals across Gujarat and beyond."
            .to_string(),
        location: "Paliyad Road, Near Charmaliya Dada Temple, Bhadravadi, Botad-Gujarat"
            .to_string(),
        phone: "+91 9876543210".to_string(),
        email: "info@vetxpharma.com".to_string(),
    }
}

/// The default product catalog, in insertion order.
#[must_use]
pub fn default_products() -> Vec<Product> {
    let now = Utc::now();
    let product = |id: &str, name: &str, description: &str, price: i64, category: &str, image: &str| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price, 0),
        category: category.to_string(),
        image: image.to_string(),
        created_at: now,
    };

    vec![
        product(
            "1",
            "VetX Amoxicillin 500mg",
            "Broad-spectrum antibiotic for bacterial infections in livestock and pets",
            120,
            "Antibiotics & Antimicrobials",
            "https://images.pexels.com/photos/3683107/pexels-photo-3683107.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        product(
            "2",
            "VetX Calcium Plus",
            "Essential calcium supplement for improved bone health and milk production",
            85,
            "Nutritional Supplements",
            "https://images.pexels.com/photos/5938567/pexels-photo-5938567.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        product(
            "3",
            "VetX Wound Heal",
            "Advanced wound care formula for faster healing and infection prevention",
            95,
            "Surgical & Wound Care",
            "https://images.pexels.com/photos/5863389/pexels-photo-5863389.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        product(
            "4",
            "VetX Dewormer Pro",
            "Effective broad-spectrum deworming solution for all livestock",
            75,
            "Parasiticides",
            "https://images.pexels.com/photos/4021769/pexels-photo-4021769.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        product(
            "5",
            "VetX Vitamin Complex",
            "Complete vitamin and mineral supplement for optimal animal health",
            110,
            "Nutritional Supplements",
            "https://images.pexels.com/photos/5938322/pexels-photo-5938322.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        product(
            "6",
            "VetX Antiseptic Solution",
            "Professional-grade antiseptic for wound cleaning and disinfection",
            65,
            "Surgical & Wound Care",
            "https://images.pexels.com/photos/3786126/pexels-photo-3786126.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
    ]
}

/// Product categories offered by the admin product form.
///
/// The public filter derives its options from the live catalog instead; this
/// list only populates the form's category dropdown.
pub const FORM_CATEGORIES: &[&str] = &[
    "Antibiotics & Antimicrobials",
    "Vaccines & Biologicals",
    "Nutritional Supplements",
    "Surgical & Wound Care",
    "Parasiticides",
    "Reproductive Health",
];
