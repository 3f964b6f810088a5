use async_trait::async_trait;

use crate::UserId;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// Credential-validation collaborator. The reservation engine never sees
/// tokens; it only ever receives an already-verified [`UserId`].
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<UserId, IdentityError>;
}

/// Placeholder verifier preserving the observed mock behavior: any non-empty
/// token maps to the demo user. A real deployment swaps in a credential
/// verifier (see the JWT verifier in the API crate).
pub struct PlaceholderVerifier;

const DEMO_USER_ID: UserId = 1;

#[async_trait]
impl IdentityVerifier for PlaceholderVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, IdentityError> {
        if token.trim().is_empty() {
            return Err(IdentityError::Unauthenticated);
        }

        tracing::debug!("placeholder identity check passed for demo user");
        Ok(DEMO_USER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_accepts_any_token() {
        let verifier = PlaceholderVerifier;
        assert_eq!(verifier.verify("anything-at-all").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_placeholder_rejects_empty_token() {
        let verifier = PlaceholderVerifier;
        assert!(matches!(
            verifier.verify("").await,
            Err(IdentityError::Unauthenticated)
        ));
    }
}
