//! PathoScope development backend.
//!
//! Serves the built dashboard and implements the `/predict` contract with a
//! deterministic stub classifier, so the UI can be exercised end to end
//! without the external inference service.

mod classify;
mod heatmap;
mod routes;
mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use routes::{health, predict};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let state = AppState::new();
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("dev backend listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
fn router(state: AppState) -> Router {
    // The dashboard may be served from another origin (or a tunnel), so CORS
    // stays permissive like the reference backend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        // Serve static files from frontend dist (when built)
        .fallback_service(ServeDir::new("../frontend/dist").append_index_html_on_directories(true))
        // Slide scans run well past axum's 2 MB default.
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use web_types::{ApiError, PredictResponse};

    const BOUNDARY: &str = "pathoscope-test-boundary";

    fn multipart_request(field: &str, payload: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"patch.png\"\r\n",
                field
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::new(4, 4);
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        png
    }

    #[tokio::test]
    async fn test_predict_round_trip() {
        let state = AppState::new();
        let app = router(state.clone());

        let response = app
            .oneshot(multipart_request("file", &tiny_png()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: PredictResponse = serde_json::from_slice(&bytes).unwrap();

        assert!(!parsed.is_error());
        assert!(parsed.confidence.ends_with('%'));
        assert!(parsed.heatmap.is_some());
        assert_eq!(state.analyses_served(), 1);
    }

    #[tokio::test]
    async fn test_predict_without_file_field_is_bad_request() {
        let app = router(AppState::new());

        let response = app
            .oneshot(multipart_request("attachment", b"bytes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: ApiError = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed.code.as_deref(), Some("MISSING_FILE"));
    }

    #[tokio::test]
    async fn test_predict_empty_upload_errors_in_band() {
        let state = AppState::new();
        let app = router(state.clone());

        let response = app.oneshot(multipart_request("file", b"")).await.unwrap();

        // The reference backend reports processing failures with HTTP 200.
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: PredictResponse = serde_json::from_slice(&bytes).unwrap();

        assert!(parsed.is_error());
        assert_eq!(state.analyses_served(), 0);
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = router(AppState::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
