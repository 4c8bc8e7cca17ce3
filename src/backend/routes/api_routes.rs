/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login, returns a JWT
 *
 * ## Protected
 * - `GET /protected` - Requires `Authorization: Bearer <token>`
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, protected, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The token gate is applied as a route layer on the protected routes only;
/// the `/auth/*` routes are public.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .route("/protected", get(protected))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected_routes)
}
