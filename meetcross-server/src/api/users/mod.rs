//! User management API module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/users", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    // Read routes: any authenticated user
    let read_routes = Router::new().route("/", get(handler::list));

    // Manage routes: Admin role required
    let manage_routes = Router::new()
        .route("/", post(handler::save))
        .route("/{id}", delete(handler::remove))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_admin,
        ));

    read_routes.merge(manage_routes)
}
