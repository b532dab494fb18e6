//! Signed-in user model
//!
//! The user is a singleton per session. It is only mutated through the
//! session holder (login, register, profile update, logout).

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::UserId;

/// Currencies offered by the profile editor; any 3-letter code is accepted
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["INR", "USD", "EUR"];

/// The authenticated user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,

    /// ISO 4217 code used for formatting amounts
    #[serde(default = "default_currency", deserialize_with = "currency_or_default")]
    pub currency: String,

    #[serde(default = "default_notifications", deserialize_with = "notifications_or_default")]
    pub notifications: bool,

    /// URL or data-URI; empty strings are normalized to `None`
    #[serde(default, deserialize_with = "non_empty_string")]
    pub profile_image: Option<String>,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_notifications() -> bool {
    true
}

fn currency_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty_string(deserializer)?.unwrap_or_else(default_currency))
}

fn notifications_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_notifications))
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Body of `PUT /auth/profile`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub currency: String,
    pub notifications: bool,
    /// Sent as an empty string when the user has no picture
    pub profile_image: String,
}

impl ProfileUpdate {
    /// Start from the user's current profile so unchanged fields are resent
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            currency: user.currency.clone(),
            notifications: user.notifications,
            profile_image: user.profile_image.clone().unwrap_or_default(),
        }
    }

    /// Validate the update before sending it
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::MissingName);
        }
        let code = self.currency.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ProfileValidationError::InvalidCurrency(self.currency.clone()));
        }
        Ok(())
    }
}

/// Validation errors for profile updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    MissingName,
    InvalidCurrency(String),
}

impl std::fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "Name is required"),
            Self::InvalidCurrency(code) => {
                write!(f, "Currency must be a 3-letter ISO code, got '{}'", code)
            }
        }
    }
}

impl std::error::Error for ProfileValidationError {}
