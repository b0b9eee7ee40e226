use axum::{
    Extension,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{
    management::{self, AppState},
    types::{ErrorResponse, RecommendRequest},
    warning,
};

pub const SERVER_FAILED: &str = "Server failed";

pub async fn recommend(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warning!("Rejected recommend request: {}", rejection.body_text());
            return server_failed();
        }
    };

    // A panic inside the pipeline surfaces here as a JoinError.
    let pipeline =
        tokio::spawn(async move { management::recommend(&state, &request.message).await });

    match pipeline.await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            warning!("Recommendation pipeline aborted: {}", e);
            server_failed()
        }
    }
}

fn server_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: SERVER_FAILED.to_string(),
        }),
    )
        .into_response()
}
