//! Page-level views
//!
//! Each view loads the lists it needs inside a [`ViewScope`] and keeps them
//! as a snapshot. Local copies are reconciled by id after every mutation
//! instead of being refetched. A failed load (anything but cancellation)
//! degrades to empty lists with a warning.

pub mod budgets;
pub mod dashboard;
pub mod expenses;
pub mod goals;
pub mod income;
pub mod reports;
pub mod scope;

use tracing::warn;

use crate::error::{PfmError, PfmResult};

pub use budgets::BudgetsView;
pub use dashboard::DashboardView;
pub use expenses::ExpensesView;
pub use goals::GoalsView;
pub use income::IncomeView;
pub use reports::ReportsView;
pub use scope::ViewScope;

/// Replace a failed load with its empty default, keeping cancellation
fn degrade<T: Default>(view: &'static str, result: PfmResult<T>) -> PfmResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(PfmError::Cancelled) => Err(PfmError::Cancelled),
        Err(err) => {
            warn!(view, error = %err, "failed to load data, showing empty view");
            Ok(T::default())
        }
    }
}
