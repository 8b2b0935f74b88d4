//! Diabalance test environment
//!
//! Loads the credentials and settings used by the Diabalance end-to-end
//! flows from the process environment, optionally seeded from a local
//! `.env` definitions file.
//!
//! ## Environment Variables
//!
//! | Variable | Purpose |
//! |----------|---------|
//! | `EMAIL` | Login email for an existing account |
//! | `PASSWORD` | Login password for an existing account |
//! | `REGISTER_USERNAME` | Username for the registration flow |
//! | `REGISTER_EMAIL` | Email for the registration flow |
//! | `REGISTER_PASSWORD` | Password for the registration flow |
//! | `BACKEND_URL` | Base URL of the backend under test |
//! | `NEW_REGISTER_USERNAME` | Username for the re-registration flow |
//! | `NEW_REGISTER_EMAIL` | Email for the re-registration flow |
//! | `NEW_REGISTER_PASSWORD` | Password for the re-registration flow |
//!
//! Every variable is optional: an unset key resolves to `None` rather than
//! an error. Variables already present in the process environment always
//! take precedence over values in the definitions file; the file only fills
//! gaps and is itself optional.
//!
//! ## Example
//!
//! ```
//! let env = diabalance_env::load();
//!
//! if let Some(url) = &env.backend_url {
//!     println!("running against {url}");
//! }
//! ```
//!
//! For a process-wide snapshot resolved exactly once, use
//! [`TestEnv::shared`].

pub mod config;
pub mod error;
pub mod util;

// Re-export main types
pub use config::{KeySet, TestEnv, load, load_from_path, load_with};
pub use error::{ConfigError, Result};
pub use util::SecretString;
