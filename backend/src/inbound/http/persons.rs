//! Person API handlers.
//!
//! ```text
//! GET  /
//! POST /person/new
//! GET  /person/detail?name=Ada&age=36
//! GET  /person/detail/{person_id}
//! PUT  /person/{person_id}
//! POST /login          (form)
//! POST /contact        (form, User-Agent header, ads cookie)
//! POST /post-image     (multipart, field "image")
//! ```

use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, put, web};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Error, Location, Login, LoginOut, Person, PersonOut, PersonWithLocation};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, validate};

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: FieldName = FieldName::new("image");
/// Key used when the optional `name` query parameter is absent.
const ABSENT_NAME_KEY: &str = "null";

/// Root greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = serde_json::Value, example = json!({"Hello": "World"}))),
    tags = ["persons"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> web::Json<Value> {
    web::Json(json!({ "Hello": "World" }))
}

/// Create a person and echo it back without the password.
#[utoipa::path(
    post,
    path = "/person/new",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = PersonOut),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "createPerson"
)]
#[post("/person/new")]
pub async fn create_person(payload: web::Json<Person>) -> ApiResult<HttpResponse> {
    let person = payload.into_inner();
    validate(&person)?;
    Ok(HttpResponse::Created().json(PersonOut::from(person)))
}

/// Query parameters for `GET /person/detail`.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PersonDetailQuery {
    /// Optional person name.
    #[validate(length(min = 1, max = 50))]
    #[param(min_length = 1, max_length = 50, example = "Ada")]
    pub name: Option<String>,
    /// Person age, echoed verbatim.
    #[param(example = "36")]
    pub age: String,
}

/// Echo `{name: age}`.
#[utoipa::path(
    get,
    path = "/person/detail",
    params(PersonDetailQuery),
    responses(
        (status = 200, description = "Name mapped to age", body = serde_json::Value, example = json!({"Ada": "36"})),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "showPerson"
)]
#[get("/person/detail")]
pub async fn show_person(query: web::Query<PersonDetailQuery>) -> ApiResult<web::Json<Value>> {
    let query = query.into_inner();
    validate(&query)?;
    let PersonDetailQuery { name, age } = query;
    let mut body = Map::new();
    body.insert(
        name.unwrap_or_else(|| ABSENT_NAME_KEY.to_owned()),
        Value::String(age),
    );
    Ok(web::Json(Value::Object(body)))
}

/// Path parameters for person lookups.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PersonPath {
    /// Positive person identifier.
    #[validate(range(min = 1))]
    #[param(minimum = 1, example = 1)]
    pub person_id: u64,
}

/// Report whether a person identifier is registered.
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    params(PersonPath),
    responses(
        (status = 200, description = "Person exists", body = serde_json::Value, example = json!({"1": "It exists!"})),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Person not found", body = Error)
    ),
    tags = ["persons"],
    operation_id = "personExists"
)]
#[get("/person/detail/{person_id}")]
pub async fn person_exists(
    state: web::Data<HttpState>,
    path: web::Path<PersonPath>,
) -> ApiResult<web::Json<Value>> {
    let path = path.into_inner();
    validate(&path)?;
    state.persons.ensure_exists(path.person_id)?;
    let mut body = Map::new();
    body.insert(path.person_id.to_string(), Value::from("It exists!"));
    Ok(web::Json(Value::Object(body)))
}

/// Body for `PUT /person/{person_id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PersonUpdateRequest {
    /// Person to merge.
    #[validate(nested)]
    pub person: Person,
    /// Location to merge.
    #[validate(nested)]
    pub location: Location,
}

/// Merge a person and a location into one response object.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    params(PersonPath),
    request_body = PersonUpdateRequest,
    responses(
        (status = 200, description = "Merged person and location", body = PersonWithLocation),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[put("/person/{person_id}")]
pub async fn update_person(
    path: web::Path<PersonPath>,
    payload: web::Json<PersonUpdateRequest>,
) -> ApiResult<web::Json<PersonWithLocation>> {
    validate(&path.into_inner())?;
    let PersonUpdateRequest { person, location } = payload.into_inner();
    validate(&person)?;
    validate(&location)?;
    Ok(web::Json(PersonWithLocation::merge(person, location)))
}

/// Form login echo.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = Login, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login echo", body = LoginOut),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "formLogin"
)]
#[post("/login")]
pub async fn form_login(form: web::Form<Login>) -> ApiResult<web::Json<LoginOut>> {
    let login = form.into_inner();
    validate(&login)?;
    info!(username = %login.username, "form login accepted");
    Ok(web::Json(LoginOut::from(login)))
}

/// Contact form fields.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    /// Sender given name.
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "Ada", min_length = 1, max_length = 20)]
    pub first_name: String,
    /// Sender family name.
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 20)]
    pub last_name: String,
    /// Reply address.
    #[validate(email)]
    #[schema(example = "ada@example.com", format = Email)]
    pub email: String,
    /// Message body, at least 20 characters.
    #[validate(length(min = 20))]
    #[schema(example = "I would like to hear more about engines.", min_length = 20)]
    pub message: String,
}

/// Accept a contact form and return the caller's user agent.
#[utoipa::path(
    post,
    path = "/contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Client user agent"),
        ("ads" = Option<String>, Cookie, description = "Advertising cookie")
    ),
    responses(
        (status = 200, description = "Caller user agent, or null when absent", body = String),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "contact"
)]
#[post("/contact")]
pub async fn contact(
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> ApiResult<web::Json<Option<String>>> {
    let form = form.into_inner();
    validate(&form)?;
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let ads = req.cookie("ads").map(|cookie| cookie.value().to_owned());
    debug!(email = %form.email, ads = ?ads, "contact form received");
    Ok(web::Json(user_agent))
}

/// Summary of an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageSummary {
    /// Uploaded file name.
    #[serde(rename = "Filename")]
    #[schema(example = "engine.png")]
    pub filename: String,
    /// Declared content type.
    #[serde(rename = "Format")]
    #[schema(example = "image/png")]
    pub format: String,
    /// Size in KiB, rounded to two decimals.
    #[serde(rename = "Size(kb)")]
    #[schema(example = 12.5)]
    pub size_kb: f64,
}

/// Size in KiB rounded to two decimal places.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "upload sizes are reported as rounded kibibytes"
)]
fn kibibytes(bytes: usize) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Describe an uploaded image.
#[utoipa::path(
    post,
    path = "/post-image",
    request_body(content = serde_json::Value, content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, description = "Image summary", body = ImageSummary),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "postImage"
)]
#[post("/post-image")]
pub async fn post_image(mut payload: Multipart) -> ApiResult<web::Json<ImageSummary>> {
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|err| multipart_error(&err))?;
        if field.name() != Some("image") {
            continue;
        }
        let filename = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .unwrap_or_default()
            .to_owned();
        let format = field
            .content_type()
            .map(ToString::to_string)
            .unwrap_or_default();
        let mut size = 0_usize;
        while let Some(chunk) = field.next().await {
            size += chunk.map_err(|err| multipart_error(&err))?.len();
        }
        info!(filename = %filename, bytes = size, "image received");
        return Ok(web::Json(ImageSummary {
            filename,
            format,
            size_kb: kibibytes(size),
        }));
    }
    Err(missing_field_error(IMAGE_FIELD))
}

fn multipart_error(err: &actix_multipart::MultipartError) -> Error {
    Error::invalid_request(format!("invalid multipart body: {err}"))
}
