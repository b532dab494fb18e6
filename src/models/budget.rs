//! Budget model
//!
//! A budget caps spending for one category over a month or a year. Budgets
//! are create-only from the client.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ids::BudgetId;
use super::money::Money;

/// Budget period
///
/// The client only creates monthly or yearly budgets, but any other value the
/// backend holds is kept verbatim so one odd record cannot fail a whole list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
    Other(String),
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
            Self::Other(raw) => write!(f, "{}", raw),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(Self::Yearly),
            other => Err(format!("Unknown budget period '{}'. Use monthly or yearly", other)),
        }
    }
}

impl Serialize for BudgetPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BudgetPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            None | Some("") => Self::default(),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "monthly" => Self::Monthly,
                "yearly" => Self::Yearly,
                _ => Self::Other(value.to_string()),
            },
        })
    }
}

/// A budget as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(rename = "_id", alias = "id")]
    pub id: BudgetId,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,

    #[serde(default)]
    pub limit: Money,

    #[serde(default)]
    pub period: BudgetPeriod,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.category, self.period, self.limit)
    }
}

/// Validation errors for new budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    NonPositiveLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Budget category is required"),
            Self::NonPositiveLimit => write!(f, "Budget limit must be greater than zero"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// Body of `POST /budgets`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBudget {
    pub category: String,
    pub limit: Money,
    pub period: BudgetPeriod,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, limit: Money, period: BudgetPeriod) -> Self {
        Self {
            category: category.into().trim().to_string(),
            limit,
            period,
        }
    }

    /// Validate the budget before submitting it
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse() {
        assert_eq!("Monthly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert_eq!("year".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Yearly);
        assert!("weekly".parse::<BudgetPeriod>().is_err());
    }

    #[test]
    fn test_deserialize_budget() {
        let budget: Budget = serde_json::from_str(
            r#"{"_id":"b1","category":"Food","limit":8000,"period":"yearly"}"#,
        )
        .unwrap();

        assert_eq!(budget.limit, Money::from_whole(8000));
        assert_eq!(budget.period, BudgetPeriod::Yearly);
    }

    #[test]
    fn test_missing_period_defaults_to_monthly() {
        let budget: Budget =
            serde_json::from_str(r#"{"_id":"b2","category":"Fuel","limit":300}"#).unwrap();
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_unknown_period_is_kept() {
        let budgets: Vec<Budget> = serde_json::from_str(
            r#"[{"_id":"b1","category":"Food","limit":8000,"period":"weekly"},
                {"_id":"b2","category":"Fuel","limit":300,"period":null},
                {"_id":"b3","category":"Rent","limit":9000,"period":"monthly"}]"#,
        )
        .unwrap();

        assert_eq!(budgets[0].period, BudgetPeriod::Other("weekly".into()));
        assert_eq!(budgets[0].period.to_string(), "weekly");
        assert_eq!(budgets[1].period, BudgetPeriod::Monthly);
        assert_eq!(budgets[2].period, BudgetPeriod::Monthly);
        assert_eq!(
            serde_json::to_value(&budgets[0].period).unwrap(),
            serde_json::json!("weekly")
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            NewBudget::new("", Money::from_whole(10), BudgetPeriod::Monthly).validate(),
            Err(BudgetValidationError::MissingCategory)
        );
        assert_eq!(
            NewBudget::new("Food", Money::from_whole(-5), BudgetPeriod::Monthly).validate(),
            Err(BudgetValidationError::NonPositiveLimit)
        );
    }

    #[test]
    fn test_new_budget_wire_shape() {
        let body =
            serde_json::to_value(NewBudget::new("Food", Money::from_whole(5000), BudgetPeriod::Yearly))
                .unwrap();
        assert_eq!(body, serde_json::json!({"category":"Food","limit":5000,"period":"yearly"}));
    }
}
