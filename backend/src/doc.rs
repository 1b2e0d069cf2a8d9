//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer along with
//! the request and response shapes they exchange. Write shapes that carry a
//! password ([`crate::domain::Person`], [`crate::domain::UserRegister`]) are
//! documented separately from the read shapes returned to callers, so the
//! generated document shows which responses are password-free.
//!
//! The OpenAPI document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Error, ErrorCode, HairColor, Location, Login, LoginOut, Person, PersonOut,
    PersonWithLocation, Tweet, TweetDraft, TweetEdit, User, UserLogin, UserLoginOut, UserRegister,
    UserUpdate,
};
use crate::inbound::http::persons::{ContactForm, ImageSummary, PersonUpdateRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chirp backend API",
        description = "Person tutorial endpoints and a Twitter-style users and tweets API backed by JSON files."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::persons::home,
        crate::inbound::http::persons::create_person,
        crate::inbound::http::persons::show_person,
        crate::inbound::http::persons::person_exists,
        crate::inbound::http::persons::update_person,
        crate::inbound::http::persons::form_login,
        crate::inbound::http::persons::contact,
        crate::inbound::http::persons::post_image,
        crate::inbound::http::tweets::greeting,
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::show_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::tweets::post_tweet,
        crate::inbound::http::tweets::list_tweets,
        crate::inbound::http::tweets::show_tweet,
        crate::inbound::http::tweets::delete_tweet,
        crate::inbound::http::tweets::update_tweet,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        HairColor,
        Person,
        PersonOut,
        Location,
        PersonWithLocation,
        PersonUpdateRequest,
        Login,
        LoginOut,
        ContactForm,
        ImageSummary,
        User,
        UserRegister,
        UserUpdate,
        UserLogin,
        UserLoginOut,
        Tweet,
        TweetDraft,
        TweetEdit,
    )),
    tags(
        (name = "persons", description = "Person tutorial endpoints"),
        (name = "users", description = "Twitter-style user accounts"),
        (name = "tweets", description = "Twitter-style tweets"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
