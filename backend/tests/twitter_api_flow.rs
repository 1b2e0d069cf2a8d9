//! End-to-end exercise of the Twitter-style API over real JSON documents.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use camino::Utf8PathBuf;
use chirp_backend::Trace;
use chirp_backend::domain::{PersonDirectory, TweetService, UserAccountService};
use chirp_backend::inbound::http::configure;
use chirp_backend::inbound::http::health::HealthState;
use chirp_backend::inbound::http::state::{HttpState, HttpStatePorts};
use chirp_backend::outbound::persistence::{
    JsonDocumentStore, JsonFileTweetRepository, JsonFileUserRepository,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

const ADA_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const TWEET_ID: &str = "6b0f8f52-0d55-4c3a-9f3e-2f1d7f6f4a10";

#[fixture]
fn data_dir() -> TempDir {
    TempDir::new().expect("temp dir")
}

async fn state_over(dir: &TempDir, initialise: bool) -> HttpState {
    let data_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
    let users = JsonFileUserRepository::new(
        JsonDocumentStore::open(&data_dir, "users.json").expect("open users store"),
    );
    let tweets = JsonFileTweetRepository::new(
        JsonDocumentStore::open(&data_dir, "tweets.json").expect("open tweets store"),
    );
    if initialise {
        users.initialise_if_missing().await.expect("initialise users");
        tweets
            .initialise_if_missing()
            .await
            .expect("initialise tweets");
    }
    HttpState::new(HttpStatePorts {
        users: Arc::new(UserAccountService::new(Arc::new(users))),
        tweets: Arc::new(TweetService::new(Arc::new(tweets), Arc::new(DefaultClock))),
        persons: PersonDirectory::default(),
    })
}

async fn init(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let health = HealthState::new();
    health.mark_ready();
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(health))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

fn read_document(dir: &TempDir, name: &str) -> Value {
    let raw = std::fs::read_to_string(dir.path().join(name)).expect("store document");
    serde_json::from_str(&raw).expect("store json")
}

#[rstest]
#[actix_web::test]
async fn signup_login_and_tweet(data_dir: TempDir) {
    let app = init(state_over(&data_dir, true).await).await;

    let signup = actix_test::TestRequest::post()
        .uri("/twitter/signup")
        .set_json(json!({
            "user_id": ADA_ID,
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "password": "analytical-engine"
        }))
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, signup).await;
    assert!(created.get("password").is_none());

    let login = actix_test::TestRequest::post()
        .uri("/twitter/login")
        .set_json(json!({"email": "ada@example.com", "password": "analytical-engine"}))
        .to_request();
    let response = actix_test::call_service(&app, login).await;
    assert_eq!(response.status(), StatusCode::OK);

    let post = actix_test::TestRequest::post()
        .uri("/twitter/post")
        .set_json(json!({"tweet_id": TWEET_ID, "content": "First!", "by": created}))
        .to_request();
    let response = actix_test::call_service(&app, post).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key("trace-id"));

    let edit = actix_test::TestRequest::put()
        .uri(&format!("/twitter/tweets/{TWEET_ID}/update"))
        .set_json(json!({"content": "Second thoughts"}))
        .to_request();
    let edited: Value = actix_test::call_and_read_body_json(&app, edit).await;
    assert_eq!(edited["content"], json!("Second thoughts"));
    assert!(edited["updated_at"].is_string());

    let tweets = read_document(&data_dir, "tweets.json");
    assert_eq!(tweets[0]["content"], json!("Second thoughts"));
    assert!(tweets[0]["by"].get("password").is_none());

    let users = read_document(&data_dir, "users.json");
    assert_eq!(users.as_array().map(Vec::len), Some(1));

    let delete = actix_test::TestRequest::delete()
        .uri(&format!("/twitter/tweets/{TWEET_ID}/delete"))
        .to_request();
    let response = actix_test::call_service(&app, delete).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_document(&data_dir, "tweets.json"), json!([]));
}

#[rstest]
#[actix_web::test]
async fn documents_survive_a_restart(data_dir: TempDir) {
    {
        let app = init(state_over(&data_dir, true).await).await;
        let signup = actix_test::TestRequest::post()
            .uri("/twitter/signup")
            .set_json(json!({
                "user_id": ADA_ID,
                "email": "ada@example.com",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "password": "analytical-engine"
            }))
            .to_request();
        actix_test::call_service(&app, signup).await;
    }

    let app = init(state_over(&data_dir, false).await).await;
    let request = actix_test::TestRequest::get()
        .uri(&format!("/twitter/users/{ADA_ID}"))
        .to_request();
    let user: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(user["email"], json!("ada@example.com"));
}

#[rstest]
#[actix_web::test]
async fn missing_documents_are_not_created_implicitly(data_dir: TempDir) {
    let app = init(state_over(&data_dir, false).await).await;

    let request = actix_test::TestRequest::get()
        .uri("/twitter/users")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!data_dir.path().join("users.json").exists());
}
