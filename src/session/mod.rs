//! Session state: the persisted bearer token and the signed-in user

pub mod holder;
pub mod token_store;

pub use holder::{Session, SessionState};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
