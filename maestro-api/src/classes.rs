use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use maestro_catalog::ClassFilter;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/classes", get(list_classes))
}

async fn list_classes(
    State(state): State<AppState>,
    Query(filter): Query<ClassFilter>,
) -> Json<Value> {
    // Empty query parameters mean "no restriction", as the mobile app sends
    // ?instrument=&level= for unselected chips
    let filter = ClassFilter {
        instrument: filter.instrument.filter(|s| !s.is_empty()),
        level: filter.level.filter(|s| !s.is_empty()),
        instructor: filter.instructor.filter(|s| !s.is_empty()),
    };

    let classes = state.catalog.list_classes(&filter).await;

    Json(json!({
        "success": true,
        "count": classes.len(),
        "data": classes,
    }))
}
