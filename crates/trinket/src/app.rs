use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::health,
        items::{create, delete, edit_form, update},
        pages::index,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/create", post(create))
        .route("/edit/{id}", get(edit_form))
        .route("/update/{id}", post(update))
        .route("/delete/{id}", post(delete))
        .route("/_health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::state::test_support::{FailingStore, TestStore};

    async fn body_string(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    fn flash_cookie(response: &Response) -> &str {
        response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Trinket"));
        assert!(html.contains("action=\"/create\""));
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/_health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["table"], "items-test");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(form_post("/create", "title=Milk&description=2%25"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(flash_cookie(&response).contains("success"));

        let response = app.oneshot(get_request("/")).await.unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Milk"));
        assert!(html.contains("2%"));
    }

    #[tokio::test]
    async fn test_create_empty_title_writes_nothing() {
        let store = Arc::new(TestStore::default());
        let app = create_app(AppState::with_store(store.clone()));

        let response = app
            .oneshot(form_post("/create", "title=+++&description=ignored"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(flash_cookie(&response).contains("warning"));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_create_with_missing_fields() {
        // A form without a description still creates; one without a title
        // is a validation notice, not a 4xx.
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(form_post("/create", "title=Bare"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(flash_cookie(&response).contains("success"));

        let response = app
            .oneshot(form_post("/create", "description=orphan"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(flash_cookie(&response).contains("warning"));
    }

    #[tokio::test]
    async fn test_edit_form_prefilled() {
        let store = Arc::new(TestStore::default());
        let state = AppState::with_store(store);
        let item = state.items.create("Milk", "2%").await.unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(get_request(&format!("/edit/{}", item.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Milk"));
        assert!(html.contains(&format!("action=\"/update/{}\"", item.id)));
    }

    #[tokio::test]
    async fn test_edit_form_not_found() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/edit/no-such-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(flash_cookie(&response).contains("warning"));
    }

    #[tokio::test]
    async fn test_update_changes_fields_but_not_id() {
        let store = Arc::new(TestStore::default());
        let state = AppState::with_store(store);
        let item = state.items.create("Milk", "2%").await.unwrap();
        let app = create_app(state.clone());

        let response = app
            .oneshot(form_post(
                &format!("/update/{}", item.id),
                "title=Milk&description=Whole",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let fetched = state.items.get(&item.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, item.id);
        assert_eq!(fetched.description, "Whole");
    }

    #[tokio::test]
    async fn test_update_empty_title_returns_to_edit_form() {
        let store = Arc::new(TestStore::default());
        let state = AppState::with_store(store);
        let item = state.items.create("Milk", "2%").await.unwrap();
        let app = create_app(state.clone());

        let response = app
            .oneshot(form_post(
                &format!("/update/{}", item.id),
                "title=&description=Whole",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/edit/{}", item.id));
        assert!(flash_cookie(&response).contains("warning"));

        let fetched = state.items.get(&item.id).await.unwrap().unwrap();
        assert_eq!(fetched.description, "2%");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(form_post("/delete/no-such-id", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(flash_cookie(&response).contains("success"));
    }

    #[tokio::test]
    async fn test_list_filter() {
        let state = AppState::default();
        state.items.create("Apple", "").await.unwrap();
        state.items.create("banana", "").await.unwrap();
        state.items.create("Cherry", "").await.unwrap();
        let app = create_app(state);

        let response = app.clone().oneshot(get_request("/?q=an")).await.unwrap();
        let html = body_string(response).await;
        assert!(html.contains("banana"));
        assert!(!html.contains("Apple"));
        assert!(!html.contains("Cherry"));
        // Filter text is echoed back into the form
        assert!(html.contains("value=\"an\""));

        let response = app.oneshot(get_request("/")).await.unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Apple"));
        assert!(html.contains("banana"));
        assert!(html.contains("Cherry"));
    }

    #[tokio::test]
    async fn test_listing_is_fail_soft_and_health_unaffected() {
        let app = create_app(AppState::with_store(Arc::new(FailingStore)));

        let response = app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(!html.contains("<tr class=\"item\">"));

        let response = app.oneshot(get_request("/_health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_store_error_on_edit_redirects_with_error_notice() {
        let app = create_app(AppState::with_store(Arc::new(FailingStore)));

        let response = app.oneshot(get_request("/edit/some-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(flash_cookie(&response).contains("error"));
    }

    #[tokio::test]
    async fn test_store_error_on_create_redirects_with_error_notice() {
        let app = create_app(AppState::with_store(Arc::new(FailingStore)));

        let response = app
            .oneshot(form_post("/create", "title=Milk&description=2%25"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(flash_cookie(&response).contains("error"));
        // The raw store diagnostic stays out of the user-facing notice
        assert!(!flash_cookie(&response).contains("unreachable"));
    }

    #[tokio::test]
    async fn test_flash_is_shown_once() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(form_post("/create", "title=Milk"))
            .await
            .unwrap();
        let cookie_pair = flash_cookie(&response)
            .split(';')
            .next()
            .unwrap()
            .to_string();

        // The page that receives the cookie shows the notice and clears it
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, &cookie_pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let clear = flash_cookie(&response);
        assert!(clear.contains("Max-Age=0"));

        let html = body_string(response).await;
        assert!(html.contains("Item created successfully"));
    }

    #[tokio::test]
    async fn test_full_crud_scenario() {
        let store = Arc::new(TestStore::default());
        let state = AppState::with_store(store.clone());
        let app = create_app(state.clone());

        // Empty table
        let html = body_string(app.clone().oneshot(get_request("/")).await.unwrap()).await;
        assert!(!html.contains("Milk"));

        // Create
        app.clone()
            .oneshot(form_post("/create", "title=Milk&description=2%25"))
            .await
            .unwrap();
        let items = state.items.list("").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Milk");

        // Update
        let id = items[0].id.clone();
        app.clone()
            .oneshot(form_post(
                &format!("/update/{id}"),
                "title=Milk&description=Whole",
            ))
            .await
            .unwrap();
        let html = body_string(app.clone().oneshot(get_request("/")).await.unwrap()).await;
        assert!(html.contains("Whole"));

        // Delete
        app.clone()
            .oneshot(form_post(&format!("/delete/{id}"), ""))
            .await
            .unwrap();
        assert!(state.items.list("").await.is_empty());
        assert_eq!(store.len().await, 0);
    }
}
