//! Company profile entity.

use serde::{Deserialize, Serialize};

/// The company profile.
///
/// A singleton: exactly one instance exists for the lifetime of the process.
/// It is only ever mutated through the store's `update_company`, never
/// created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub founder: String,
    pub description: String,
    pub location: String,
    pub phone: String,
    pub email: String,
}

/// Partial update for the company profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub founder: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CompanyPatch {
    /// Apply this patch to the company record, overwriting only the present
    /// fields.
    pub fn apply(self, company: &mut Company) {
        if let Some(name) = self.name {
            company.name = name;
        }
        if let Some(founder) = self.founder {
            company.founder = founder;
        }
        if let Some(description) = self.description {
            company.description = description;
        }
        if let Some(location) = self.location {
            company.location = location;
        }
        if let Some(phone) = self.phone {
            company.phone = phone;
        }
        if let Some(email) = self.email {
            company.email = email;
        }
    }
}
