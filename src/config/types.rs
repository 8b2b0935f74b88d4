//! Snapshot types for the resolved test environment.
//!
//! Values are kept exactly as found in the environment: opaque strings or
//! absent, never parsed or validated. Passwords are wrapped in
//! [`SecretString`] so debug output of a snapshot cannot leak them.

use crate::config::keys::{self, KeySet};
use crate::util::SecretString;

/// Login credentials for an existing account.
#[derive(Debug, Clone, Default)]
pub struct LoginCredentials {
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

/// Account details for a registration flow.
#[derive(Debug, Clone, Default)]
pub struct RegisterAccount {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

/// Immutable snapshot of the resolved test environment.
///
/// Constructed once by [`load`](crate::load) (or on first access to
/// [`TestEnv::shared`]) and never mutated afterwards. Prefer passing a
/// snapshot explicitly; tests can then build one by hand instead of going
/// through the process environment.
#[derive(Debug, Clone, Default)]
pub struct TestEnv {
    /// `EMAIL` / `PASSWORD`.
    pub login: LoginCredentials,

    /// `REGISTER_*`.
    pub register: RegisterAccount,

    /// `NEW_REGISTER_*`; only populated when resolved against [`KeySet::V2`].
    pub new_register: RegisterAccount,

    /// `BACKEND_URL`.
    pub backend_url: Option<String>,

    /// The key set revision this snapshot was resolved against.
    pub key_set: KeySet,
}

impl TestEnv {
    /// Look up a resolved value by its environment-variable name.
    ///
    /// Returns `None` both for a key that was unset at load time and for a
    /// name outside the fixed key set. Secrets are returned in the clear;
    /// only `Debug` output is redacted.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            keys::EMAIL => self.login.email.as_deref(),
            keys::PASSWORD => self.login.password.as_ref().map(SecretString::expose_secret),
            keys::REGISTER_USERNAME => self.register.username.as_deref(),
            keys::REGISTER_EMAIL => self.register.email.as_deref(),
            keys::REGISTER_PASSWORD => self
                .register
                .password
                .as_ref()
                .map(SecretString::expose_secret),
            keys::BACKEND_URL => self.backend_url.as_deref(),
            keys::NEW_REGISTER_USERNAME => self.new_register.username.as_deref(),
            keys::NEW_REGISTER_EMAIL => self.new_register.email.as_deref(),
            keys::NEW_REGISTER_PASSWORD => self
                .new_register
                .password
                .as_ref()
                .map(SecretString::expose_secret),
            _ => None,
        }
    }

    /// Iterate over every key of the resolved set with its value.
    pub fn resolved(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        self.key_set.keys().iter().map(move |&key| (key, self.get(key)))
    }
}
