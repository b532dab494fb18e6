//! Service layer for pfm
//!
//! Typed wrappers over the REST client, one per resource. Each service
//! validates its request before any network call and unwraps the response
//! envelope into model types.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod income;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use goal::GoalService;
pub use income::IncomeService;
