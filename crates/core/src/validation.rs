//! Field validation helpers shared by the create DTOs.
//!
//! The rules themselves are declared with `validator` attributes on the DTO.
//! This module supplies the custom rule functions those attributes call and
//! flattens `ValidationErrors` into a stable, serializable list.

use std::borrow::Cow;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Reason reported when a price is not a plain non-negative number.
pub const PRICE_MESSAGE: &str = "Price should be a number";

/// A single failing field and the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Require text to contain something other than whitespace.
///
/// `message` becomes the reported reason, so each field keeps its own wording.
pub fn require_text(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

/// Require a price string to parse as a finite, non-negative number.
///
/// The value is stored verbatim; parsing only decides validity.
pub fn validate_price(price: &str) -> Result<(), ValidationError> {
    match price.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("numeric").with_message(Cow::Borrowed(PRICE_MESSAGE))),
    }
}

/// Flatten `validator` output into field errors sorted by field name.
///
/// Errors without a message fall back to the rule code.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| FieldError {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}
