//! Tests for the user shapes and their projections.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn register_json() -> Value {
    json!({
        "user_id": VALID_ID,
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "birth_date": "1815-12-10",
        "password": "analytical-engine"
    })
}

#[fixture]
fn registration(register_json: Value) -> UserRegister {
    serde_json::from_value(register_json).expect("registration payload")
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6 ", UserValidationError::InvalidId)]
fn user_id_rejects_bad_text(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_serialises_as_string() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(serde_json::to_value(id).expect("serialise"), json!(VALID_ID));
}

#[rstest]
fn registration_passes_validation(registration: UserRegister) {
    assert!(registration.validate().is_ok());
}

#[rstest]
#[case("email", json!("not-an-email"))]
#[case("first_name", json!(""))]
#[case("last_name", json!("x".repeat(51)))]
#[case("password", json!("short"))]
fn registration_rejects_invalid_fields(
    register_json: Value,
    #[case] field: &str,
    #[case] value: Value,
) {
    let mut payload = register_json;
    payload[field] = value;
    let registration: UserRegister = serde_json::from_value(payload).expect("payload shape");
    let errors = registration.validate().expect_err("invalid field");
    assert!(errors.field_errors().contains_key(field));
}

#[rstest]
fn registration_rejects_malformed_identifier(register_json: Value) {
    let mut payload = register_json;
    payload["user_id"] = json!("1712");
    assert!(serde_json::from_value::<UserRegister>(payload).is_err());
}

#[rstest]
fn public_projection_drops_password(registration: UserRegister, register_json: Value) {
    let user = User::from(registration);
    let mut expected = register_json;
    expected
        .as_object_mut()
        .expect("object")
        .remove("password");
    assert_eq!(serde_json::to_value(user).expect("serialise"), expected);
}

#[rstest]
fn parts_round_trip(registration: UserRegister) {
    let (user, password) = registration.clone().into_parts();
    assert_eq!(UserRegister::from_parts(user, password), registration);
}

#[rstest]
fn missing_birth_date_defaults_to_none(register_json: Value) {
    let mut payload = register_json;
    payload
        .as_object_mut()
        .expect("object")
        .remove("birth_date");
    let registration: UserRegister = serde_json::from_value(payload).expect("payload");
    assert!(registration.birth_date.is_none());
}

#[rstest]
fn update_binds_path_identifier() {
    let update: UserUpdate = serde_json::from_value(json!({
        "email": "grace@example.com",
        "first_name": "Grace",
        "last_name": "Hopper",
        "password": "cobol-forever"
    }))
    .expect("update payload");
    let id = UserId::random();
    let record = update.into_registration(id);
    assert_eq!(record.user_id, id);
    assert_eq!(record.email, "grace@example.com");
}

#[rstest]
fn login_out_carries_fixed_message() {
    let out = UserLoginOut::success("ada@example.com");
    assert_eq!(out.message, LOGIN_SUCCESS_MESSAGE);
}
