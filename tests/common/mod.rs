// Shared by several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Extension, Json, Router,
    extract::{Form, Path, Query},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use moodtune::{config::Settings, management::AppState, utils};

pub const CLIENT_ID: &str = "client";
pub const CLIENT_SECRET: &str = "secret";
pub const MOCK_TOKEN: &str = "mock-token";
/// How long a hanging endpoint stalls before answering.
pub const HANG: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub enum LlmReply {
    Keyword(String),
    Status(u16),
    Malformed,
    NoChoices,
    /// Accepts the request and never answers within any sane client timeout.
    Hang,
}

/// Behaviour of the fake language model and Spotify endpoints.
#[derive(Clone, Debug)]
pub struct MockConfig {
    pub llm: LlmReply,
    pub token_status: u16,
    pub expires_in: u64,
    pub search_status: u16,
    pub search_items: usize,
    /// Search result positions returned with a null id.
    pub null_ids: Vec<usize>,
    /// Track index whose detail request fails with 404.
    pub failing_detail: Option<usize>,
    /// Delay detail answers so that earlier tracks finish last.
    pub reverse_detail_delay: bool,
    /// Track index whose detail request stalls past the client timeout.
    pub hanging_detail: Option<usize>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            llm: LlmReply::Keyword("sad hindi love songs".to_string()),
            token_status: 200,
            expires_in: 3600,
            search_status: 200,
            search_items: 3,
            null_ids: Vec::new(),
            failing_detail: None,
            reverse_detail_delay: false,
            hanging_detail: None,
        }
    }
}

#[derive(Default)]
pub struct Hits {
    pub llm: AtomicUsize,
    pub token: AtomicUsize,
    pub search: AtomicUsize,
    pub detail: AtomicUsize,
    pub llm_request: Mutex<Option<Value>>,
    pub search_query: Mutex<Option<HashMap<String, String>>>,
}

impl Hits {
    pub fn llm(&self) -> usize {
        self.llm.load(Ordering::SeqCst)
    }

    pub fn token(&self) -> usize {
        self.token.load(Ordering::SeqCst)
    }

    pub fn search(&self) -> usize {
        self.search.load(Ordering::SeqCst)
    }

    pub fn detail(&self) -> usize {
        self.detail.load(Ordering::SeqCst)
    }

    pub fn llm_request(&self) -> Value {
        self.llm_request.lock().unwrap().clone().unwrap_or(Value::Null)
    }

    pub fn search_query(&self) -> HashMap<String, String> {
        self.search_query.lock().unwrap().clone().unwrap_or_default()
    }
}

#[derive(Clone)]
struct MockState {
    config: Arc<MockConfig>,
    hits: Arc<Hits>,
}

pub struct MockServer {
    pub base: String,
    pub hits: Arc<Hits>,
}

impl MockServer {
    pub async fn start(config: MockConfig) -> Self {
        let hits = Arc::new(Hits::default());
        let state = MockState {
            config: Arc::new(config),
            hits: Arc::clone(&hits),
        };

        let app = Router::new()
            .route("/openai/v1/chat/completions", post(chat_completion))
            .route("/api/token", post(token))
            .route("/v1/search", get(search))
            .route("/v1/tracks/{id}", get(track))
            .layer(Extension(state));

        let base = serve(app).await;
        Self { base, hits }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            server_address: "127.0.0.1:0".to_string(),
            llm_api_key: "gsk_test".to_string(),
            llm_api_url: format!("{}/openai/v1/chat/completions", self.base),
            llm_model: "llama-3.1-8b-instant".to_string(),
            spotify_client_id: CLIENT_ID.to_string(),
            spotify_client_secret: CLIENT_SECRET.to_string(),
            spotify_api_url: format!("{}/v1", self.base),
            spotify_token_url: format!("{}/api/token", self.base),
            request_timeout: Duration::from_secs(5),
            fetch_track_details: true,
            cache_token: true,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.settings()).unwrap()
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {}", MOCK_TOKEN).as_str())
}

pub fn detail_track(i: usize) -> Value {
    json!({
        "id": format!("track-{}", i),
        "name": format!("Song {}", i),
        "artists": [{ "name": format!("Artist {}", i) }, { "name": "Featured" }],
        "album": {
            "name": format!("Album {}", i),
            "images": [
                { "url": format!("https://i.scdn.co/image/{}/640", i) },
                { "url": format!("https://i.scdn.co/image/{}/300", i) }
            ]
        },
        "popularity": i % 101,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/track-{}", i) },
        "preview_url": null
    })
}

fn search_item(i: usize, null_id: bool) -> Value {
    let id = if null_id {
        Value::Null
    } else {
        Value::String(format!("track-{}", i))
    };
    json!({
        "id": id,
        "name": format!("Search Song {}", i),
        "artists": [{ "name": format!("Artist {}", i) }],
        "album": { "name": "Search Album", "images": [] },
        "popularity": 1,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/track-{}", i) }
    })
}

async fn chat_completion(
    Extension(state): Extension<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.hits.llm.fetch_add(1, Ordering::SeqCst);
    *state.hits.llm_request.lock().unwrap() = Some(body);

    let key = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if key != Some("Bearer gsk_test") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid api key" })),
        )
            .into_response();
    }

    match &state.config.llm {
        LlmReply::Keyword(keyword) => Json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": keyword } }]
        }))
        .into_response(),
        LlmReply::Status(code) => {
            (status(*code), Json(json!({ "error": "model unavailable" }))).into_response()
        }
        LlmReply::Malformed => (
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"unexpected": true}"#,
        )
            .into_response(),
        LlmReply::NoChoices => Json(json!({ "choices": [] })).into_response(),
        LlmReply::Hang => {
            tokio::time::sleep(HANG).await;
            Json(json!({ "choices": [] })).into_response()
        }
    }
}

async fn token(
    Extension(state): Extension<MockState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.hits.token.fetch_add(1, Ordering::SeqCst);

    let expected = utils::basic_auth_header(CLIENT_ID, CLIENT_SECRET);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    let grant_ok = form.get("grant_type").map(String::as_str) == Some("client_credentials");

    if state.config.token_status != 200 || !authorized || !grant_ok {
        let code = if state.config.token_status != 200 {
            state.config.token_status
        } else {
            400
        };
        return (status(code), Json(json!({ "error": "invalid_client" }))).into_response();
    }

    Json(json!({
        "access_token": MOCK_TOKEN,
        "token_type": "Bearer",
        "expires_in": state.config.expires_in
    }))
    .into_response()
}

async fn search(
    Extension(state): Extension<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.hits.search.fetch_add(1, Ordering::SeqCst);
    *state.hits.search_query.lock().unwrap() = Some(query);

    if !has_bearer(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "no token" }))).into_response();
    }
    if state.config.search_status != 200 {
        return (status(state.config.search_status), Json(json!({ "error": "search failed" })))
            .into_response();
    }

    let items: Vec<Value> = (0..state.config.search_items)
        .map(|i| search_item(i, state.config.null_ids.contains(&i)))
        .collect();

    Json(json!({ "tracks": { "items": items } })).into_response()
}

async fn track(
    Extension(state): Extension<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.hits.detail.fetch_add(1, Ordering::SeqCst);

    if !has_bearer(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "no token" }))).into_response();
    }

    let Some(i) = id
        .strip_prefix("track-")
        .and_then(|n| n.parse::<usize>().ok())
    else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "unknown track" }))).into_response();
    };

    if state.config.failing_detail == Some(i) {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "unknown track" }))).into_response();
    }

    if state.config.hanging_detail == Some(i) {
        tokio::time::sleep(HANG).await;
    }

    if state.config.reverse_detail_delay {
        let delay = 20usize.saturating_sub(i) as u64 * 10;
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    Json(detail_track(i)).into_response()
}
