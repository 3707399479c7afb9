//! Prediction route implementing the `/predict` contract.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use web_types::{ApiError, PredictResponse};

use crate::classify;
use crate::state::AppState;

/// POST /predict - Classify one uploaded image.
///
/// Expects a multipart body with a `file` field. A malformed request gets a
/// 400 with an [`ApiError`]; processing failures are reported in-band with
/// HTTP 200 and `status: "error"`, matching the reference backend.
pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ApiError>)> {
    let upload = read_file_field(multipart).await.map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_code(err, "BAD_MULTIPART")),
        )
    })?;

    let Some(upload) = upload else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_code(
                "Multipart body has no `file` field".to_string(),
                "MISSING_FILE",
            )),
        ));
    };

    tracing::info!(
        file_name = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        size = upload.bytes.len(),
        "running stub analysis"
    );

    let response = classify::analyze(&upload.bytes);
    if !response.is_error() {
        state.record_analysis();
    }

    Ok(Json(response))
}

/// An uploaded image extracted from the multipart body.
struct Upload {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// Pull the `file` field out of the multipart stream.
async fn read_file_field(mut multipart: Multipart) -> Result<Option<Upload>, String> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(err) => return Err(format!("Invalid multipart body: {}", err)),
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|err| format!("Failed to read upload: {}", err))?;

        return Ok(Some(Upload {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }
}
