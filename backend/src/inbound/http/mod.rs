//! HTTP inbound adapter exposing REST endpoints.
//!
//! The person API lives at the root; the Twitter-style API is scoped under
//! `/twitter` so its `/login` does not collide with the form login.

use actix_web::web;

pub mod error;
pub mod health;
pub mod persons;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tweets;
pub mod users;
pub mod validation;

pub use crate::domain::ApiResult;

/// Register every endpoint plus the extractor error handlers.
///
/// Handlers expect `web::Data<HttpState>` and `web::Data<HealthState>` to be
/// registered on the app.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use chirp_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    validation::configure_extractors(cfg);
    cfg.service(health::ready)
        .service(health::live)
        .service(
            web::scope("/twitter")
                .service(tweets::greeting)
                .service(users::signup)
                .service(users::login)
                .service(users::list_users)
                .service(users::show_user)
                .service(users::delete_user)
                .service(users::update_user)
                .service(tweets::post_tweet)
                .service(tweets::list_tweets)
                .service(tweets::show_tweet)
                .service(tweets::delete_tweet)
                .service(tweets::update_tweet),
        )
        .service(persons::home)
        .service(persons::create_person)
        .service(persons::show_person)
        .service(persons::person_exists)
        .service(persons::update_person)
        .service(persons::form_login)
        .service(persons::contact)
        .service(persons::post_image);
}
