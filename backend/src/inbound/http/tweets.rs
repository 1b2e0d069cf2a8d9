//! Twitter-style tweet handlers.
//!
//! ```text
//! GET    /twitter
//! POST   /twitter/post
//! GET    /twitter/tweets
//! GET    /twitter/tweets/{tweet_id}
//! DELETE /twitter/tweets/{tweet_id}/delete
//! PUT    /twitter/tweets/{tweet_id}/update {"content":"edited"}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::{Value, json};

use crate::domain::{Error, Tweet, TweetDraft, TweetEdit, TweetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, validate};

const TWEET_ID_FIELD: FieldName = FieldName::new("tweet_id");

fn parse_tweet_id(raw: &str) -> Result<TweetId, Error> {
    parse_uuid(raw, TWEET_ID_FIELD).map(TweetId::from_uuid)
}

/// Twitter API greeting.
#[utoipa::path(
    get,
    path = "/twitter",
    responses((status = 200, description = "Greeting", body = serde_json::Value, example = json!({"Twitter API": "Working!"}))),
    tags = ["tweets"],
    operation_id = "twitterHome"
)]
#[get("")]
pub async fn greeting() -> web::Json<Value> {
    web::Json(json!({ "Twitter API": "Working!" }))
}

/// Publish a tweet.
#[utoipa::path(
    post,
    path = "/twitter/post",
    request_body = TweetDraft,
    responses(
        (status = 201, description = "Tweet published", body = Tweet),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tweets"],
    operation_id = "postTweet"
)]
#[post("/post")]
pub async fn post_tweet(
    state: web::Data<HttpState>,
    payload: web::Json<TweetDraft>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner();
    validate(&draft)?;
    let tweet = state.tweets.publish(draft).await?;
    Ok(HttpResponse::Created().json(tweet))
}

/// List tweets, oldest first.
#[utoipa::path(
    get,
    path = "/twitter/tweets",
    responses(
        (status = 200, description = "Tweets", body = [Tweet]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tweets"],
    operation_id = "listTweets"
)]
#[get("/tweets")]
pub async fn list_tweets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Tweet>>> {
    Ok(web::Json(state.tweets.list().await?))
}

/// Show one tweet.
#[utoipa::path(
    get,
    path = "/twitter/tweets/{tweet_id}",
    params(("tweet_id" = String, Path, description = "Tweet UUID")),
    responses(
        (status = 200, description = "Tweet", body = Tweet),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Tweet not found", body = Error)
    ),
    tags = ["tweets"],
    operation_id = "showTweet"
)]
#[get("/tweets/{tweet_id}")]
pub async fn show_tweet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Tweet>> {
    let id = parse_tweet_id(&path)?;
    Ok(web::Json(state.tweets.find(&id).await?))
}

/// Delete a tweet.
#[utoipa::path(
    delete,
    path = "/twitter/tweets/{tweet_id}/delete",
    params(("tweet_id" = String, Path, description = "Tweet UUID")),
    responses(
        (status = 200, description = "Deleted tweet", body = Tweet),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Tweet not found", body = Error)
    ),
    tags = ["tweets"],
    operation_id = "deleteTweet"
)]
#[delete("/tweets/{tweet_id}/delete")]
pub async fn delete_tweet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Tweet>> {
    let id = parse_tweet_id(&path)?;
    Ok(web::Json(state.tweets.delete(&id).await?))
}

/// Replace a tweet's content.
#[utoipa::path(
    put,
    path = "/twitter/tweets/{tweet_id}/update",
    params(("tweet_id" = String, Path, description = "Tweet UUID")),
    request_body = TweetEdit,
    responses(
        (status = 200, description = "Edited tweet", body = Tweet),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Tweet not found", body = Error)
    ),
    tags = ["tweets"],
    operation_id = "updateTweet"
)]
#[put("/tweets/{tweet_id}/update")]
pub async fn update_tweet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TweetEdit>,
) -> ApiResult<web::Json<Tweet>> {
    let id = parse_tweet_id(&path)?;
    let edit = payload.into_inner();
    validate(&edit)?;
    Ok(web::Json(state.tweets.edit(&id, edit).await?))
}
