//! List page handler and template plumbing.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use trinket_core::item::Item;

use crate::state::AppState;

use super::flash::{self, FlashMessage};

/// Render an Askama template, clearing the flash cookie when one was shown.
pub(crate) fn render_page<T: Template>(template: T, had_flash: bool) -> Response {
    match template.render() {
        Ok(html) => {
            if had_flash {
                ([(SET_COOKIE, flash::clear_cookie_header())], Html(html)).into_response()
            } else {
                Html(html).into_response()
            }
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render template: {err}"),
        )
            .into_response(),
    }
}

/// Display label for the page header, falling back to the app name.
pub(crate) fn display_label(state: &AppState) -> String {
    state
        .server_id
        .clone()
        .unwrap_or_else(|| "Trinket".to_string())
}

/// Index page template showing the item table and forms.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    label: String,
    q: String,
    items: Vec<Item>,
    flash: Option<FlashMessage>,
}

/// Query parameters for the list page.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive title substring filter
    #[serde(default)]
    pub q: String,
}

/// Handler for the list page (GET /).
///
/// A store failure renders the page with zero items; it never 500s.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Response {
    let items = state.items.list(&query.q).await;
    let flash = flash::take_flash(&headers);
    let had_flash = flash.is_some();

    let template = IndexTemplate {
        label: display_label(&state),
        q: query.q,
        items,
        flash,
    };

    render_page(template, had_flash)
}
