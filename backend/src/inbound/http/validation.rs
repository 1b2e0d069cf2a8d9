//! Shared validation helpers for inbound HTTP adapters.
//!
//! Two sources of rejection feed one error shape:
//! - `validator` constraint failures on decoded payloads.
//! - actix extractor failures (malformed JSON, form, query, or path).
//!
//! Both become `invalid_request` errors whose details carry the offending
//! `field` and a machine-readable `code`.

use actix_web::error::{
    InternalError, JsonPayloadError, PathError, QueryPayloadError, UrlencodedError,
};
use actix_web::{HttpRequest, ResponseError, web};
use serde_json::{Map, Value, json};
use uuid::Uuid;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MalformedBody,
    MalformedQuery,
    MalformedPath,
    MissingField,
    InvalidUuid,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::MalformedQuery => "malformed_query",
            ErrorCode::MalformedPath => "malformed_path",
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

fn malformed(code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({ "code": code.as_str() }))
}

/// Run `validator` constraints on `payload`.
///
/// # Errors
/// Returns the first failing field as an `invalid_request` error.
pub(crate) fn validate<T: Validate>(payload: &T) -> Result<(), Error> {
    payload.validate().map_err(|errors| validation_error(&errors))
}

/// Convert `validator` failures into a domain error.
///
/// Field paths for nested structs are dotted (`by.email`). Only the first
/// failing constraint is reported, mirroring how clients fix one field at a
/// time.
pub(crate) fn validation_error(errors: &ValidationErrors) -> Error {
    match first_failure(errors, "") {
        Some((field, failure)) => {
            let message = failure
                .message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("{field} failed {} validation", failure.code));
            let mut details = Map::new();
            details.insert("field".to_owned(), Value::from(field));
            details.insert("code".to_owned(), Value::from(failure.code.to_string()));
            let mut params = Map::new();
            for (key, value) in &failure.params {
                if key == "value" {
                    details.insert("value".to_owned(), value.clone());
                } else {
                    params.insert(key.to_string(), value.clone());
                }
            }
            if !params.is_empty() {
                details.insert("params".to_owned(), Value::Object(params));
            }
            Error::invalid_request(message).with_details(Value::Object(details))
        }
        None => Error::invalid_request("request failed validation"),
    }
}

fn first_failure(
    errors: &ValidationErrors,
    prefix: &str,
) -> Option<(String, validator::ValidationError)> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(left, _), (right, _)| left.cmp(right));
    for (field, kind) in fields {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        let found = match kind {
            ValidationErrorsKind::Field(failures) => {
                failures.first().map(|failure| (path, failure.clone()))
            }
            ValidationErrorsKind::Struct(nested) => first_failure(nested, &path),
            ValidationErrorsKind::List(items) => items
                .iter()
                .find_map(|(index, nested)| first_failure(nested, &format!("{path}[{index}]"))),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

fn reject(error: Error) -> actix_web::Error {
    let response = error.error_response();
    InternalError::from_response(error, response).into()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    reject(malformed(
        ErrorCode::MalformedBody,
        format!("invalid JSON body: {err}"),
    ))
}

fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    reject(malformed(
        ErrorCode::MalformedBody,
        format!("invalid form body: {err}"),
    ))
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    reject(malformed(
        ErrorCode::MalformedQuery,
        format!("invalid query string: {err}"),
    ))
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    reject(malformed(
        ErrorCode::MalformedPath,
        format!("invalid path parameter: {err}"),
    ))
}

/// Register extractor configs that answer malformed input with the standard
/// error envelope.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
