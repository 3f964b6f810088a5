use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use maestro_core::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// The verified caller, injected into request extensions by [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 1. Extract token from Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::AuthenticationError)?;

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    // 2. Verify via the configured identity collaborator
    let user_id = state
        .identity
        .verify(token)
        .await
        .map_err(|_| AppError::AuthenticationError)?;

    // 3. Inject the verified caller
    req.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(req).await)
}
