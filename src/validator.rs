//! Request validation.
//!
//! Field rules are plain functions ([`is_non_empty`], [`is_valid_email`]) wrapped
//! for `#[validate(custom(...))]`. [`ValidatedJson`] parses the body, rejects
//! unrecognized keys, then runs the `validator` rules; every rule failure is a
//! 400.

use std::sync::LazyLock;

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use regex::Regex;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

pub const EXTRA_FIELDS_MESSAGE: &str =
    "Please enter only Name and Email in JSON format. Extra fields are not allowed.";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

pub fn is_non_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Shape check only: `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

/// Payloads that keep track of keys outside their schema.
pub trait UnknownFields {
    fn unknown_fields(&self) -> Vec<&str>;
}

pub fn has_extra_fields<T: UnknownFields>(payload: &T) -> bool {
    !payload.unknown_fields().is_empty()
}

pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if is_non_empty(value) {
        Ok(())
    } else {
        Err(ValidationError::new("blank"))
    }
}

pub fn validate_email_shape(value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps a body rejection to an error response.
///
/// Anything wrong with the JSON itself is a 400, including the schema
/// mismatches axum reports as 422. A body that could not be read at all keeps
/// axum's status (413 when it is over the size limit).
pub fn json_rejection_error(rejection: JsonRejection) -> AppError {
    match &rejection {
        JsonRejection::JsonDataError(err) => {
            let error_msg = err.body_text();
            if let Some(field) = missing_field(&error_msg) {
                AppError::bad_request(anyhow!("{} is required", field))
            } else if error_msg.contains("invalid type") {
                AppError::bad_request(anyhow!("Invalid field type in request"))
            } else {
                AppError::bad_request(anyhow!("Invalid request body"))
            }
        }
        JsonRejection::MissingJsonContentType(_) => AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        )),
        JsonRejection::BytesRejection(_) => {
            AppError::new(rejection.status(), anyhow!("Failed to read request body"))
        }
        _ => AppError::bad_request(anyhow!("Invalid request body")),
    }
}

fn missing_field(error_msg: &str) -> Option<&str> {
    error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
}

/// Checks an already-parsed payload: unknown keys first, then field rules.
pub fn check_payload<T>(value: &T) -> Result<(), AppError>
where
    T: Validate + UnknownFields,
{
    if has_extra_fields(value) {
        return Err(AppError::bad_request(anyhow!(EXTRA_FIELDS_MESSAGE)));
    }

    value.validate().map_err(|errors| {
        AppError::bad_request(anyhow!("Invalid user data. {}", format_errors(&errors)))
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + UnknownFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_error)?;

        check_payload(&value)?;

        Ok(ValidatedJson(value))
    }
}
