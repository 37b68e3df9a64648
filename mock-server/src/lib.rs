use std::{collections::BTreeMap, time::Duration};

use axum::{
    extract::{Path, RawQuery},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

/// Size of the `/large` body, just over ureq's default read limit.
pub const LARGE_BODY_LEN: usize = 11 * 1024 * 1024;

/// `/latin1` body: Latin-1 encoded, so not valid UTF-8.
pub const LATIN1_BODY: &[u8] = b"caf\xe9 not found";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub name: String,
    pub brand: String,
}

/// Error payload in the upstream API's shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub errors: Vec<String>,
}

/// Body of a successful `/articles` search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticlePage {
    /// Query string exactly as received, without the `?`.
    pub query: String,
    pub content: Vec<Article>,
}

fn catalog() -> Vec<Article> {
    vec![
        Article {
            id: "AD541A0AU-Q11".to_string(),
            name: "Gazelle".to_string(),
            brand: "adidas Originals".to_string(),
        },
        Article {
            id: "NI112A0BJ-A11".to_string(),
            name: "Air Max 90".to_string(),
            brand: "Nike Sportswear".to_string(),
        },
    ]
}

pub fn app() -> Router {
    Router::new()
        .route("/articles", get(search_articles))
        .route("/articles/{id}", get(get_article))
        .route("/debug/headers", get(debug_headers))
        .route("/redirect", get(redirect))
        .route("/slow", get(slow))
        .route("/large", get(large))
        .route("/latin1", get(latin1))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ApiError {
        status: status.as_u16(),
        message: message.to_string(),
        errors: Vec::new(),
    };
    (status, Json(body)).into_response()
}

/// Values of every `q=` pair in a raw query string.
fn search_terms(query: &str) -> impl Iterator<Item = &str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == "q")
        .map(|(_, value)| value)
}

/// Answers 400 when any search term is `nothing`, like the real API does for
/// searches without hits.
async fn search_articles(RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    if search_terms(&query).any(|term| term == "nothing") {
        return error_response(StatusCode::BAD_REQUEST, "no articles found");
    }
    Json(ArticlePage {
        query,
        content: catalog(),
    })
    .into_response()
}

async fn get_article(Path(id): Path<String>) -> Response {
    match catalog().into_iter().find(|a| a.id == id) {
        Some(article) => Json(article).into_response(),
        None => error_response(StatusCode::NOT_FOUND, &format!("article {id} not found")),
    }
}

/// Echo request headers back as a JSON object keyed by lowercase name.
async fn debug_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let echoed = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(echoed)
}

async fn redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/articles")]).into_response()
}

async fn slow() -> &'static str {
    tokio::time::sleep(SLOW_DELAY).await;
    "finally"
}

async fn large() -> String {
    "a".repeat(LARGE_BODY_LEN)
}

async fn latin1() -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain; charset=iso-8859-1")],
        LATIN1_BODY,
    )
        .into_response()
}
