//! Configuration module
//!
//! Resolves the fixed key set from the process environment, optionally
//! seeded from a `.env` definitions file.

pub mod keys;
pub mod loader;
pub mod types;

pub use keys::KeySet;
pub use loader::{load, load_from_path, load_with};
pub use types::{LoginCredentials, RegisterAccount, TestEnv};
