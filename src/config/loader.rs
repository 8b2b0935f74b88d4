//! Environment loader.
//!
//! Merge order follows the dotenv convention: variables already present in
//! the process environment always win, and the definitions file only fills
//! gaps. The merge is performed by `dotenvy`, whose default mode never
//! overwrites an existing variable.

use std::env;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::config::keys::{self, KeySet};
use crate::config::types::{LoginCredentials, RegisterAccount, TestEnv};
use crate::error::ConfigError;
use crate::util::SecretString;

static SHARED: OnceLock<TestEnv> = OnceLock::new();

/// Load the test environment, seeding from a `.env` file if one exists.
///
/// Searches the current directory and its ancestors for `.env`, merges any
/// keys not already set, then resolves the latest key set. A missing file
/// and missing variables are both silent; every absent key resolves to
/// `None`. Loading twice in the same process yields identical values.
pub fn load() -> TestEnv {
    load_with(KeySet::default())
}

/// Load the test environment against an explicit key set revision.
pub fn load_with(set: KeySet) -> TestEnv {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "merged definitions file"),
        Err(_) => debug!("no definitions file found"),
    }
    resolve(set)
}

/// Load the test environment from an explicitly named definitions file.
///
/// Unlike [`load`], an explicitly named file must exist and parse. Ambient
/// variables still take precedence over its contents.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TestEnv, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    dotenvy::from_path(path).map_err(|e| match e {
        dotenvy::Error::Io(io) => ConfigError::Io(io),
        other => ConfigError::Load(other.to_string()),
    })?;
    debug!(path = %path.display(), "merged definitions file");

    Ok(resolve(KeySet::default()))
}

/// Read the fixed key set out of the process environment.
fn resolve(set: KeySet) -> TestEnv {
    let value = |key: &'static str| -> Option<String> {
        if !set.contains(key) {
            return None;
        }
        match env::var(key) {
            Ok(v) => Some(v),
            Err(_) => {
                trace!(key, "variable not set");
                None
            }
        }
    };
    let secret = |key: &'static str| value(key).map(SecretString::new);

    TestEnv {
        login: LoginCredentials {
            email: value(keys::EMAIL),
            password: secret(keys::PASSWORD),
        },
        register: RegisterAccount {
            username: value(keys::REGISTER_USERNAME),
            email: value(keys::REGISTER_EMAIL),
            password: secret(keys::REGISTER_PASSWORD),
        },
        new_register: RegisterAccount {
            username: value(keys::NEW_REGISTER_USERNAME),
            email: value(keys::NEW_REGISTER_EMAIL),
            password: secret(keys::NEW_REGISTER_PASSWORD),
        },
        backend_url: value(keys::BACKEND_URL),
        key_set: set,
    }
}

impl TestEnv {
    /// Process-wide snapshot, resolved on first access and stable for the
    /// rest of the process lifetime.
    pub fn shared() -> &'static TestEnv {
        SHARED.get_or_init(load)
    }
}
