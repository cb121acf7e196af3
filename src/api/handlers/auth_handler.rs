//! Authentication endpoints.

use axum::{
    extract::State,
    http::header::AUTHORIZATION,
    middleware,
    response::{AppendHeaders, IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppResult;
use crate::services::AuthenticationRequest;

/// Create authentication routes
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(me).route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
        .route("/login", post(login))
}

/// Log in and receive a session token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = AuthenticationRequest,
    responses(
        (status = 200, description = "Login successful", body = crate::api::models::Authentication),
        (status = 400, description = "Validation error"),
        (status = 401, description = "UNAUTHORIZED")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthenticationRequest>,
) -> AppResult<impl IntoResponse> {
    let authentication = state
        .authentication_handler
        .authenticate(&payload)
        .await?;

    tracing::info!(email = %payload.email, "Session token issued");

    let header = format!("{}{}", BEARER_TOKEN_PREFIX, authentication.token());
    Ok((AppendHeaders([(AUTHORIZATION, header)]), Json(authentication)))
}

/// Describe the caller behind the presented session token
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = CurrentUser),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn me(Extension(current_user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(current_user)
}
