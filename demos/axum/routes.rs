use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Json},
};

use crate::cors::AppState;

const TRACE_HEADER: &str = "x-example-trace";

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Json(format!("{} (origin checks run before this handler)", state.greeting))
}

/// Echoes the caller's trace id; browsers only expose it because it is listed in `exposed_headers`.
pub async fn trace(headers: HeaderMap) -> impl IntoResponse {
    let trace_id = headers
        .get(TRACE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none")
        .to_string();

    ([(TRACE_HEADER, trace_id.clone())], Json(trace_id))
}
