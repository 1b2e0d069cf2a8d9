//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn respond(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body()).await.expect("response body");
    let body = serde_json::from_slice(&bytes).expect("error payload");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("invalid credentials"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("user missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_follows_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::not_found("This person doesn't exist!")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"person_id": 99}));

    let (status, header, body) = respond(&error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body, error);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_traceable() {
    let error = Error::internal("users.json is malformed: trailing characters")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"path": "users.json"}));

    let (status, header, body) = respond(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body.message(), REDACTED_MESSAGE);
    assert_eq!(body.trace_id(), Some(TRACE_ID));
    assert!(body.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn untraced_errors_send_no_header() {
    let (_, header, body) = respond(&Error::invalid_request("bad")).await;
    assert!(header.is_none());
    assert_eq!(body.trace_id(), None);
}

#[rstest]
fn client_view_borrows_non_internal_errors() {
    let error = Error::conflict("taken");
    assert!(matches!(client_view(&error), Cow::Borrowed(_)));
}
