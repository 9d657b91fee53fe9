use std::env;

use crate::env::parse_bool;

/// Policy knobs for the users resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersConfig {
    /// Id given to the first user ever created.
    pub id_base: i64,
    /// Reject an update whose name and email equal the stored values.
    pub reject_noop_updates: bool,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            id_base: 0,
            reject_noop_updates: true,
        }
    }
}

impl UsersConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            id_base: lookup("USER_ID_BASE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.id_base),
            reject_noop_updates: lookup("REJECT_NOOP_UPDATES")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.reject_noop_updates),
        }
    }
}
