use async_trait::async_trait;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use maestro_core::{IdentityError, IdentityVerifier, UserId};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// HS256 bearer-token verifier; `sub` carries the numeric user id.
///
/// Selected with `auth.mode = "jwt"`; the default mode keeps the observed
/// placeholder behavior.
pub struct JwtVerifier {
    secret: String,
}

impl JwtVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, IdentityError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| IdentityError::InvalidCredentials(e.to_string()))?;

        token_data
            .claims
            .sub
            .parse::<UserId>()
            .map_err(|_| IdentityError::InvalidCredentials("subject is not a user id".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/guest", post(login_guest))
}

async fn login_guest(State(state): State<AppState>) -> Result<Json<AuthResponse>, AppError> {
    // Guest ids are throwaway; a timestamp keeps them unique enough for demos
    let guest_id = Utc::now().timestamp_millis();

    let claims = Claims {
        sub: guest_id.to_string(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::Anyhow(anyhow::anyhow!("Token encoding failed: {e}")))?;

    Ok(Json(AuthResponse { token }))
}
