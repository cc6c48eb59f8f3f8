//! Form payloads and the input-validation layer.
//!
//! This is the only validation in the system: the store accepts whatever it
//! is given, so every required-field and format check happens here, before
//! a submission is turned into a `NewProduct` or `CompanyPatch`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use vetx_core::{CompanyPatch, Email, NewProduct};

/// Raw product form submission. All fields arrive as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl ProductForm {
    /// Validate the submission into store-ready fields.
    ///
    /// # Errors
    ///
    /// Returns every user-visible field error at once, so the form can show
    /// them together.
    pub fn validate(&self) -> Result<NewProduct, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Product name is required".to_string());
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("Description is required".to_string());
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.push("Category is required".to_string());
        }

        let image = self.image.trim();
        if image.is_empty() {
            errors.push("Image URL is required".to_string());
        }

        let price = match parse_price(&self.price) {
            Ok(price) => Some(price),
            Err(message) => {
                errors.push(message);
                None
            }
        };

        match (errors.is_empty(), price) {
            (true, Some(price)) => Ok(NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                image: image.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Prefill a form from an existing product, for the edit page.
    #[must_use]
    pub fn from_product(product: &vetx_core::Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.normalize().to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Parse a submitted price string into a non-negative decimal.
fn parse_price(raw: &str) -> Result<Decimal, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Price is required".to_string());
    }
    let price =
        Decimal::from_str(raw).map_err(|_| "Price must be a number".to_string())?;
    if price < Decimal::ZERO {
        return Err("Price must not be negative".to_string());
    }
    Ok(price)
}

/// Raw company form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub founder: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl CompanyForm {
    /// Validate the submission into a company patch.
    ///
    /// The company form always submits every field, so a valid submission
    /// produces a patch with all fields present.
    ///
    /// # Errors
    ///
    /// Returns every user-visible field error at once.
    pub fn validate(&self) -> Result<CompanyPatch, Vec<String>> {
        let mut errors = Vec::new();

        for (value, message) in [
            (&self.name, "Company name is required"),
            (&self.founder, "Founder name is required"),
            (&self.description, "Description is required"),
            (&self.location, "Location is required"),
            (&self.phone, "Phone number is required"),
        ] {
            if value.trim().is_empty() {
                errors.push(message.to_string());
            }
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if Email::parse(email).is_err() {
            errors.push("Invalid email address".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CompanyPatch {
            name: Some(self.name.trim().to_string()),
            founder: Some(self.founder.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            location: Some(self.location.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            email: Some(email.to_string()),
        })
    }

    /// Prefill the form from the current company record.
    #[must_use]
    pub fn from_company(company: &vetx_core::Company) -> Self {
        Self {
            name: company.name.clone(),
            founder: company.founder.clone(),
            description: company.description.clone(),
            location: company.location.clone(),
            phone: company.phone.clone(),
            email: company.email.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_product_form() -> ProductForm {
        ProductForm {
            name: "VetX Dewormer Pro".to_string(),
            description: "Broad-spectrum deworming solution".to_string(),
            price: "75".to_string(),
            category: "Parasiticides".to_string(),
            image: "https://example.com/p.jpg".to_string(),
        }
    }

    #[test]
    fn test_valid_product_form() {
        let fields = valid_product_form().validate().unwrap();
        assert_eq!(fields.name, "VetX Dewormer Pro");
        assert_eq!(fields.price, Decimal::new(75, 0));
    }

    #[test]
    fn test_product_form_trims_whitespace() {
        let form = ProductForm {
            name: "  VetX Dewormer Pro  ".to_string(),
            price: " 75.50 ".to_string(),
            ..valid_product_form()
        };
        let fields = form.validate().unwrap();
        assert_eq!(fields.name, "VetX Dewormer Pro");
        assert_eq!(fields.price, Decimal::new(7550, 2));
    }

    #[test]
    fn test_empty_product_form_reports_every_field() {
        let errors = ProductForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.contains("Product name")));
        assert!(errors.iter().any(|e| e.contains("Price")));
    }

    #[test]
    fn test_negative_price_rejected() {
        let form = ProductForm {
            price: "-5".to_string(),
            ..valid_product_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec!["Price must not be negative".to_string()]);
    }

    #[test]
    fn test_zero_price_allowed() {
        let form = ProductForm {
            price: "0".to_string(),
            ..valid_product_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_unparseable_price_rejected() {
        let form = ProductForm {
            price: "seventy-five".to_string(),
            ..valid_product_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec!["Price must be a number".to_string()]);
    }

    fn valid_company_form() -> CompanyForm {
        CompanyForm {
            name: "VET_X PHARMA".to_string(),
            founder: "Haresh L Kanetiya".to_string(),
            description: "Premium Veterinary Pharmaceuticals".to_string(),
            location: "Botad, Gujarat".to_string(),
            phone: "+91 9876543210".to_string(),
            email: "info@vetxpharma.com".to_string(),
        }
    }

    #[test]
    fn test_valid_company_form_patches_all_fields() {
        let patch = valid_company_form().validate().unwrap();
        assert!(patch.name.is_some());
        assert!(patch.founder.is_some());
        assert!(patch.description.is_some());
        assert!(patch.location.is_some());
        assert!(patch.phone.is_some());
        assert_eq!(patch.email.as_deref(), Some("info@vetxpharma.com"));
    }

    #[test]
    fn test_company_form_rejects_malformed_email() {
        let form = CompanyForm {
            email: "not-an-email".to_string(),
            ..valid_company_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec!["Invalid email address".to_string()]);
    }

    #[test]
    fn test_company_form_requires_every_field() {
        let errors = CompanyForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
    }
}
