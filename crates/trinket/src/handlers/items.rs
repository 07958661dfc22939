//! Item CRUD handlers.
//!
//! Every mutation ends in a redirect carrying a flash notice; store failures
//! never render an error page. Raw store error text stays in the server log.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Form,
};
use serde::Deserialize;

use trinket_core::item::{Item, ItemError};

use crate::state::AppState;

use super::flash::{self, redirect_with_flash, FlashMessage};
use super::pages::{display_label, render_page};

/// Form fields for create and update.
///
/// Missing fields default to empty strings; validation happens in the
/// repository, not here.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Edit page template with a pre-filled form.
#[derive(Template)]
#[template(path = "edit.html")]
struct EditTemplate {
    label: String,
    item: Item,
    flash: Option<FlashMessage>,
}

/// Create an item (POST /create).
pub async fn create(State(state): State<AppState>, Form(form): Form<ItemForm>) -> Response {
    match state.items.create(&form.title, &form.description).await {
        Ok(_) => redirect_with_flash("/", FlashMessage::success("Item created successfully")),
        Err(ItemError::TitleRequired) => {
            redirect_with_flash("/", FlashMessage::warning("Title is required"))
        }
        Err(ItemError::Store(err)) => {
            tracing::error!(error = %err, "Create error");
            redirect_with_flash("/", FlashMessage::error("Failed to create item"))
        }
    }
}

/// Render the edit form (GET /edit/{id}).
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let item = match state.items.get(&id).await {
        Ok(Some(item)) => item,
        Ok(None) => return redirect_with_flash("/", FlashMessage::warning("Item not found")),
        Err(err) => {
            tracing::error!(error = %err, item_id = %id, "Get error");
            return redirect_with_flash("/", FlashMessage::error("Failed to fetch item"));
        }
    };

    let flash = flash::take_flash(&headers);
    let had_flash = flash.is_some();

    let template = EditTemplate {
        label: display_label(&state),
        item,
        flash,
    };

    render_page(template, had_flash)
}

/// Update an item (POST /update/{id}).
///
/// An empty title sends the user back to the edit form, not the list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Response {
    match state.items.update(&id, &form.title, &form.description).await {
        Ok(()) => redirect_with_flash("/", FlashMessage::success("Item updated")),
        Err(ItemError::TitleRequired) => redirect_with_flash(
            &format!("/edit/{id}"),
            FlashMessage::warning("Title is required"),
        ),
        Err(ItemError::Store(err)) => {
            tracing::error!(error = %err, item_id = %id, "Update error");
            redirect_with_flash("/", FlashMessage::error("Failed to update item"))
        }
    }
}

/// Delete an item (POST /delete/{id}).
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.items.delete(&id).await {
        Ok(()) => redirect_with_flash("/", FlashMessage::success("Item deleted")),
        Err(err) => {
            tracing::error!(error = %err, item_id = %id, "Delete error");
            redirect_with_flash("/", FlashMessage::error("Failed to delete item"))
        }
    }
}
