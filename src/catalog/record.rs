use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One tradable batch of credits from a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonCreditRecord {
    pub id: String,
    pub registry_serial: String,
    pub project_name: String,
    pub location: String,
    pub country: String,
    pub registry: String,
    pub vintage_year: u16,
    pub status: CreditStatus,
    pub trust_score: f64,
    pub available_quantity: u32,
    pub price_per_unit: f64,
    pub project_category: String,
    pub image_ref: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CreditStatus {
    Active,
    Retired,
    Pending,
}

impl CreditStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CreditStatus::Active => "active",
            CreditStatus::Retired => "retired",
            CreditStatus::Pending => "pending",
        }
    }
}

impl CarbonCreditRecord {
    pub fn is_purchasable(&self) -> bool {
        self.status == CreditStatus::Active && self.available_quantity > 0
    }

    /// Schema check applied to every record entering the catalog.
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: self.registry_serial.clone(),
                field: "id",
            });
        }
        if self.project_name.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: self.id.clone(),
                field: "project_name",
            });
        }
        if self.registry.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: self.id.clone(),
                field: "registry",
            });
        }
        if !(0.0..=100.0).contains(&self.trust_score) {
            return Err(CatalogError::TrustScoreOutOfRange {
                id: self.id.clone(),
                score: self.trust_score,
            });
        }
        if self.price_per_unit <= 0.0 || !self.price_per_unit.is_finite() {
            return Err(CatalogError::InvalidPrice {
                id: self.id.clone(),
                price: self.price_per_unit,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate record id: {0}")]
    DuplicateId(String),
    #[error("record {id}: required field '{field}' is empty")]
    MissingField { id: String, field: &'static str },
    #[error("record {id}: trust score {score} is outside 0..=100")]
    TrustScoreOutOfRange { id: String, score: f64 },
    #[error("record {id}: price per unit {price} must be a positive amount")]
    InvalidPrice { id: String, price: f64 },
}
