/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. `GET /` - the login page from the static directory
 * 2. API routes (register, login, protected)
 * 3. Fallback - any other file under the static directory, 404 otherwise
 */

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_dir = app_state.config.static_dir.clone();
    let login_page = app_state.config.login_page();

    let router = Router::new().route_service("/", ServeFile::new(login_page));

    let router = configure_api_routes(router, &app_state);

    let router = router
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}
