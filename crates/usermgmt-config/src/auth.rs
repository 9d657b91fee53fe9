use std::env;

use crate::env::parse_list;

/// Paths served without an `Authorization` header. Matching is done per path
/// segment, so `/swagger-ui` covers `/swagger-ui/index.html` but not
/// `/swagger-uix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub public_path_prefixes: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            public_path_prefixes: vec![
                "/swagger-ui".to_string(),
                "/api-docs".to_string(),
                "/scalar".to_string(),
            ],
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("AUTH_PUBLIC_PATHS") {
            Some(raw) => Self {
                public_path_prefixes: parse_list(&raw),
            },
            None => Self::default(),
        }
    }

    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_path_prefixes
            .iter()
            .any(|prefix| starts_with_segments(path, prefix))
    }
}

fn starts_with_segments(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }

    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
