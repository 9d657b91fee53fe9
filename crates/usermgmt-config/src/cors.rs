use std::env;

use crate::env::parse_list;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_list("http://localhost:3000,http://localhost:5173"),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("ALLOWED_ORIGINS") {
            Some(raw) => Self {
                allowed_origins: parse_list(&raw),
            },
            None => Self::default(),
        }
    }
}
