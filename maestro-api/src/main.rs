use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use maestro_api::auth::JwtVerifier;
use maestro_api::middleware::rate_limit::RateLimiter;
use maestro_api::{
    app,
    state::{AppState, AuthConfig},
};
use maestro_core::{
    BookingStore, ClassCatalog, IdentityVerifier, PlaceholderVerifier, ReservationEngine,
};
use maestro_store::{seed_demo_catalog, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maestro_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = maestro_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Maestro API on port {}", config.server.port);

    let store = Arc::new(MemoryStore::new());
    if config.catalog.seed_demo_data {
        seed_demo_catalog(&store).expect("Failed to seed demo catalog");
    }

    let engine = Arc::new(ReservationEngine::new(
        store.clone() as Arc<dyn ClassCatalog>,
        store.clone() as Arc<dyn BookingStore>,
    ));

    let identity: Arc<dyn IdentityVerifier> = match config.auth.mode.as_str() {
        "jwt" => Arc::new(JwtVerifier::new(config.auth.jwt_secret.clone())),
        _ => Arc::new(PlaceholderVerifier),
    };

    let app_state = AppState {
        catalog: store as Arc<dyn ClassCatalog>,
        engine,
        identity,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
        rate_limiter: Arc::new(RateLimiter::new(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.window_seconds),
        )),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
