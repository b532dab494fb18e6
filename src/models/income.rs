//! Income model
//!
//! Income entries are append-only from the client's perspective: they can be
//! listed and created, never edited.

use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

/// Validation errors for new income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    MissingSource,
    NonPositiveAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSource => write!(f, "Income source is required"),
            Self::NonPositiveAmount => write!(f, "Income amount must be greater than zero"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// An income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(rename = "_id", alias = "id")]
    pub id: IncomeId,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub source: String,

    #[serde(default)]
    pub amount: Money,
}

/// Body of `POST /income`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIncome {
    pub source: String,
    pub amount: Money,
}

impl NewIncome {
    pub fn new(source: impl Into<String>, amount: Money) -> Self {
        Self {
            source: source.into().trim().to_string(),
            amount,
        }
    }

    /// Validate the entry before submitting it
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.source.trim().is_empty() {
            return Err(IncomeValidationError::MissingSource);
        }
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
