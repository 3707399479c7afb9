//! Health probe route.

use axum::{Json, extract::State};
use web_types::HealthResponse;

use crate::state::AppState;

/// GET /health - Liveness probe with basic counters.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.uptime_secs(),
        analyses_served: state.analyses_served(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_counters() {
        let state = AppState::new();
        state.record_analysis();

        let Json(resp) = health(State(state)).await;

        assert_eq!(resp.status, "ok");
        assert_eq!(resp.analyses_served, 1);
    }
}
