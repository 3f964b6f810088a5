use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Fixed-window request counter per client IP.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, (Instant, u32)>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request against `key`; false once the window is exhausted.
    /// Expired windows are swept on every call, so the map never holds more
    /// than the keys seen in the current window.
    pub fn check(&self, key: &str) -> bool {
        let mut windows = self.windows.lock().expect("rate limit lock poisoned");
        let now = Instant::now();
        windows.retain(|_, (start, _)| now.duration_since(*start) < self.window);
        let entry = windows.entry(key.to_string()).or_insert((now, 0));
        entry.1 += 1;
        entry.1 <= self.max_requests
    }
}

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, impl IntoResponse> {
    // Connect info is absent when the router is driven directly in tests
    let key = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if state.rate_limiter.check(&key) {
        Ok(next.run(req).await)
    } else {
        Err((StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded"))
    }
}
