use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Html;
use axum::extract::State;

use crate::AppState;


pub async fn get_index(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    super::get_lookup_page(&state).await
}
