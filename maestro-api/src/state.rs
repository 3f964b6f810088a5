use std::sync::Arc;

use maestro_core::{ClassCatalog, IdentityVerifier, ReservationEngine};

use crate::middleware::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ClassCatalog>,
    pub engine: Arc<ReservationEngine>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub auth: AuthConfig,
    pub rate_limiter: Arc<RateLimiter>,
}
