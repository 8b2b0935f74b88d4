//! Environment variable names and the versioned key table.
//!
//! Centralized so the variable names appear exactly once. The key set has
//! been revised once: [`KeySet::V2`] added the `NEW_REGISTER_*` trio for
//! the re-registration flow. Both revisions stay addressable so call sites
//! pinned to the original set keep resolving the same keys.

/// Login email for an existing account.
pub const EMAIL: &str = "EMAIL";

/// Login password for an existing account.
pub const PASSWORD: &str = "PASSWORD";

/// Username for the registration flow.
pub const REGISTER_USERNAME: &str = "REGISTER_USERNAME";

/// Email for the registration flow.
pub const REGISTER_EMAIL: &str = "REGISTER_EMAIL";

/// Password for the registration flow.
pub const REGISTER_PASSWORD: &str = "REGISTER_PASSWORD";

/// Base URL of the backend under test.
pub const BACKEND_URL: &str = "BACKEND_URL";

/// Username for the re-registration flow.
pub const NEW_REGISTER_USERNAME: &str = "NEW_REGISTER_USERNAME";

/// Email for the re-registration flow.
pub const NEW_REGISTER_EMAIL: &str = "NEW_REGISTER_EMAIL";

/// Password for the re-registration flow.
pub const NEW_REGISTER_PASSWORD: &str = "NEW_REGISTER_PASSWORD";

/// Revision of the fixed key set to resolve.
///
/// Invariant: every later revision is a superset of the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySet {
    /// The original six keys: login, registration, backend URL.
    V1,
    /// V1 plus the `NEW_REGISTER_*` trio.
    #[default]
    V2,
}

impl KeySet {
    /// All environment variable names in this revision, in table order.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            KeySet::V1 => &[
                EMAIL,
                PASSWORD,
                REGISTER_USERNAME,
                REGISTER_EMAIL,
                REGISTER_PASSWORD,
                BACKEND_URL,
            ],
            KeySet::V2 => &[
                EMAIL,
                PASSWORD,
                REGISTER_USERNAME,
                REGISTER_EMAIL,
                REGISTER_PASSWORD,
                BACKEND_URL,
                NEW_REGISTER_USERNAME,
                NEW_REGISTER_EMAIL,
                NEW_REGISTER_PASSWORD,
            ],
        }
    }

    /// Whether `name` is a member of this revision.
    pub fn contains(self, name: &str) -> bool {
        self.keys().contains(&name)
    }
}
