//! Twitter-style user account handlers.
//!
//! ```text
//! POST   /twitter/signup
//! POST   /twitter/login {"email":"ada@example.com","password":"analytical-engine"}
//! GET    /twitter/users
//! GET    /twitter/users/{user_id}
//! DELETE /twitter/users/{user_id}/delete
//! PUT    /twitter/users/{user_id}/update
//! ```
//!
//! Every response is shaped as [`User`]; passwords never leave the service.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, User, UserId, UserLogin, UserLoginOut, UserRegister, UserUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, validate};

const USER_ID_FIELD: FieldName = FieldName::new("user_id");

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    parse_uuid(raw, USER_ID_FIELD).map(UserId::from_uuid)
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/twitter/signup",
    request_body = UserRegister,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<UserRegister>,
) -> ApiResult<HttpResponse> {
    let registration = payload.into_inner();
    validate(&registration)?;
    let user = state.users.register(registration).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Check credentials against registered users.
#[utoipa::path(
    post,
    path = "/twitter/login",
    request_body = UserLogin,
    responses(
        (status = 200, description = "Login success", body = UserLoginOut),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<UserLogin>,
) -> ApiResult<web::Json<UserLoginOut>> {
    let credentials = payload.into_inner();
    validate(&credentials)?;
    Ok(web::Json(state.users.login(credentials).await?))
}

/// List registered users.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use chirp_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/twitter/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list().await?))
}

/// Show one user.
#[utoipa::path(
    get,
    path = "/twitter/users/{user_id}",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/users/{user_id}")]
pub async fn show_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    Ok(web::Json(state.users.find(&id).await?))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/twitter/users/{user_id}/delete",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{user_id}/delete")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    Ok(web::Json(state.users.delete(&id).await?))
}

/// Replace a user's fields.
#[utoipa::path(
    put,
    path = "/twitter/users/{user_id}/update",
    params(("user_id" = String, Path, description = "User UUID")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{user_id}/update")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserUpdate>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let update = payload.into_inner();
    validate(&update)?;
    Ok(web::Json(state.users.update(&id, update).await?))
}
