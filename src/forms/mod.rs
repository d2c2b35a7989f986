//! JSON request bodies and their conversion into validated payloads.

use serde::Deserialize;

use crate::domain::types::TypeConstraintError;

pub mod attributes;
pub mod brands;
pub mod categories;
pub mod features;
pub mod helpers;
pub mod products;
pub mod suppliers;
pub mod warehouses;

/// Decimal amount accepted either as a JSON number or as a string.
///
/// `serde_json` is built with `arbitrary_precision`, so a number carries the
/// digits exactly as they appeared in the request body.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DecimalInput {
    Number(serde_json::Number),
    Text(String),
}

impl DecimalInput {
    /// The submitted literal, as text.
    pub fn into_literal(self) -> String {
        match self {
            DecimalInput::Number(number) => number.to_string(),
            DecimalInput::Text(text) => text,
        }
    }
}

/// Trims optional text and treats blank values as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Optional decimal where a blank string counts as absent.
pub(crate) fn optional_decimal<T>(
    value: Option<DecimalInput>,
    parse: impl Fn(String) -> Result<T, TypeConstraintError>,
) -> Result<Option<T>, TypeConstraintError> {
    non_blank(value.map(DecimalInput::into_literal))
        .map(parse)
        .transpose()
}

/// Optional foreign key where `0` means "none" and negatives are rejected.
pub(crate) fn optional_reference<T>(
    value: Option<i32>,
    field: &'static str,
    build: impl Fn(i32) -> Result<T, TypeConstraintError>,
) -> Result<Option<T>, TypeConstraintError> {
    match value {
        None | Some(0) => Ok(None),
        Some(id) if id < 0 => Err(TypeConstraintError::NonPositiveId(field)),
        Some(id) => build(id).map(Some),
    }
}

/// Rejects malformed e-mail addresses; absent values pass.
pub(crate) fn optional_email(value: Option<String>) -> Result<Option<String>, TypeConstraintError> {
    use validator::ValidateEmail;

    match non_blank(value) {
        Some(email) if !email.validate_email() => Err(TypeConstraintError::InvalidValue(format!(
            "email: {email}"
        ))),
        other => Ok(other),
    }
}
