pub mod index;
pub mod lookup;

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::models::empty::Empty;
use crate::AppState;


#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
}

/// Renders the lookup page from the current controller snapshot.
pub async fn get_lookup_page(state: &AppState) -> (StatusCode, Html<String>) {
    let view = state.lookup.lock().await.view();
    let body = match state.registry.render("index", &view) {
        Ok(body) => body,
        Err(err) => {
            log::error!("Failed to render lookup page!\n{:?}", err);
            return get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).await;
        }
    };

    let data = TemplateViewModel {
        title: "Lookup".into(),
        body,
    };
    let r = state.registry.render("template", &data).unwrap_or_default();
    (StatusCode::OK, Html(r))
}

pub async fn get_error_page(registry: &Handlebars<'static>, status: StatusCode) -> (StatusCode, Html<String>) {
    let data = TemplateViewModel {
        title: status.to_string(),
        body: registry.render("errors/500", &Empty {}).unwrap_or_default(),
    };
    let r = registry.render("template", &data).unwrap_or_default();
    (status, Html(r))
}
