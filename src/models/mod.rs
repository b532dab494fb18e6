//! Core data models for pfm
//!
//! Entities exchanged with the remote API. None of them is owned by the
//! client; views hold transient copies that are reconciled by id after
//! every mutation.

pub mod budget;
pub mod collection;
pub mod dates;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod user;

pub use budget::{Budget, BudgetPeriod, NewBudget};
pub use collection::{find_by_key, remove_by_key, upsert_by_key, Keyed};
pub use expense::{Expense, ExpenseDraft};
pub use goal::{Goal, GoalProgressUpdate, NewGoal, DEFAULT_CONTRIBUTION};
pub use ids::{BudgetId, ExpenseId, GoalId, IncomeId, UserId};
pub use income::{Income, NewIncome};
pub use money::Money;
pub use user::{ProfileUpdate, User};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that the backend may send as `null`, using the
/// type's default in that case
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
