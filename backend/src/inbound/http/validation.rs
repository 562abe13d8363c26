//! Shared validation helpers for inbound HTTP adapters.

use actix_web::web::Bytes;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::Error;
use crate::domain::forms::FormViolations;

/// Top-level message for any form that failed validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Map form violations to `400` with a `violations` list in `details`.
///
/// # Examples
/// ```
/// use housing::domain::forms::HouseTypeForm;
/// use housing::inbound::http::validation::form_violations_error;
/// use serde_json::json;
///
/// let violations = HouseTypeForm::parse(&json!({ "typeName": "AC", "price": -5 }))
///     .expect_err("invalid");
/// let err = form_violations_error(violations);
/// assert_eq!(err.message(), "Validation failed");
/// ```
pub fn form_violations_error(violations: FormViolations) -> Error {
    Error::invalid_request(VALIDATION_FAILED_MESSAGE)
        .with_details(json!({ "violations": violations }))
}

/// Map a malformed JSON payload to `400`.
pub(crate) fn invalid_json_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request("Invalid JSON body").with_details(json!({ "reason": reason.to_string() }))
}

/// Decode a raw request body as JSON.
///
/// Handlers take the body as [`Bytes`] and decode it only after the session
/// and role checks, so an anonymous caller never sees a body error.
pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(invalid_json_error)
}
