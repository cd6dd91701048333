use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        calculator::calculate_project_cost,
        health::livez,
        project_roles::{
            create_project_role, delete_project_role, get_project_role, list_project_roles,
            update_project_role,
        },
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        roles::{create_role, delete_role, get_role, list_roles, update_role},
    },
    state::AppState,
};

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/roles", get(list_roles).post(create_role))
        .route(
            "/roles/{id}",
            get(get_role).put(update_role).delete(delete_role),
        )
        .route("/project-roles", post(create_project_role))
        .route(
            "/project-roles/project/{project_id}",
            get(list_project_roles),
        )
        .route(
            "/project-roles/{id}",
            get(get_project_role)
                .put(update_project_role)
                .delete(delete_project_role),
        )
        .route(
            "/calculator/projects/{project_id}/calculate",
            get(calculate_project_cost),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
