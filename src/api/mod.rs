//! REST layer
//!
//! `ApiClient` performs the calls and normalizes failures; `envelope`
//! unwraps the `{ data }` and `{ user }` shapes the backend answers with.

pub mod client;
pub mod envelope;

pub use client::{interpret_response, ApiClient};
pub use envelope::AuthResponse;
