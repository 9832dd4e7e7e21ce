use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Html;
use axum::extract::{State, Query};
use serde::Deserialize;

use crate::lookup::{FieldChange, Mode};
use crate::AppState;


#[derive(Debug, Deserialize)]
pub struct LookupFormViewModel {
    name: String,
    mode: Mode,
}

#[axum_macros::debug_handler]
pub async fn get_index(query: Query<LookupFormViewModel>, State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    let vm = query.0;

    let ticket = {
        let mut lookup = state.lookup.lock().await;
        lookup.apply(FieldChange::Mode(vm.mode));
        lookup.apply(FieldChange::Name(vm.name));
        if lookup.input_error().is_some() {
            // Rejected input never reaches the stored name and no
            // request goes out; the page shows the validation message.
            None
        } else {
            Some(lookup.begin_submit())
        }
    };

    // The lock is not held across the request, so overlapping submissions
    // can race; the generation check in complete picks the winner.
    if let Some(ticket) = ticket {
        let outcome = state
            .github_lookup_service
            .lookup(ticket.mode, &ticket.name)
            .await;
        state.lookup.lock().await.complete(ticket, outcome);
    }

    super::get_lookup_page(&state).await
}
