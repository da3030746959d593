use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    controller::{
        get_new_entry,
        project::{create_project, delete_project, get_project, get_projects, update_project},
        timeline::{create_timeline, delete_timeline, get_timeline, get_timelines, update_timeline},
    },
    state::AppState,
};

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/projects", get(get_projects))
        .route(
            "/projects/newEntry",
            get(get_new_entry).post(create_project),
        )
        .route("/projects/{id}", get(get_project))
        .route("/projects/{id}/update", post(update_project))
        .route("/projects/{id}/delete", delete(delete_project))
        .route("/timeline", get(get_timelines))
        .route(
            "/timeline/newEntry",
            get(get_new_entry).post(create_timeline),
        )
        .route("/timeline/{id}", get(get_timeline))
        .route("/timeline/{id}/update", post(update_timeline))
        .route("/timeline/{id}/delete", delete(delete_timeline))
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin may call the API. Only the methods and headers the routes use are allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, X_REQUESTED_WITH, AUTHORIZATION])
}
