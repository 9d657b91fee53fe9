//! User data models and DTOs.
//!
//! - [`User`] - the stored entity
//! - [`UserInput`] - create/update payload, keeping any unrecognized keys in
//!   [`UserInput::extra_fields`] so they can be rejected
//! - [`UserPayload`] - documented request shape for the OpenAPI schema

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validator::{UnknownFields, validate_email_shape, validate_non_blank};

/// A user held by the store. `id` never changes once assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UserInput {
    #[validate(custom(function = "validate_non_blank", message = "Name must be provided"))]
    pub name: String,
    #[validate(custom(function = "validate_email_shape", message = "Email must be valid"))]
    pub email: String,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, serde_json::Value>,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            extra_fields: HashMap::new(),
        }
    }

    /// True when applying this input to `user` would change nothing.
    pub fn matches(&self, user: &User) -> bool {
        self.name == user.name && self.email == user.email
    }
}

impl UnknownFields for UserInput {
    fn unknown_fields(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.extra_fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Accepted request body. Any other key is rejected with 400.
#[derive(Debug, ToSchema)]
#[schema(example = json!({"name": "Ann", "email": "ann@example.com"}))]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}
