//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Count data**: The daily count directory exists
/// 2. **Board directory**: The directory file yields at least one mapping
/// 3. **Cache**: Reports the directory cache backend
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "count_data": { "status": "ok", "message": "/2ch_sc/scount.json" },
///     "board_directory": { "status": "ok", "message": "812 boards mapped" },
///     "cache": { "status": "ok", "message": "memory, 1 file cached" }
///   }
/// }
/// ```
///
/// Degraded inputs do not stop the report from rendering; they only mean
/// it will show no data or unknown servers.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let count_check = check_count_data(&state).await;

    let directory_check = check_board_directory(&state).await;

    let cache_check = check_cache(&state).await;

    let all_healthy = count_check.is_ok() && directory_check.is_ok() && cache_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            count_data: count_check,
            board_directory: directory_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the count data directory exists.
async fn check_count_data(state: &AppState) -> CheckStatus {
    let dir = &state.report_service.sources().count_data_dir;
    match tokio::fs::metadata(dir).await {
        Ok(metadata) if metadata.is_dir() => CheckStatus::ok(dir.display().to_string()),
        Ok(_) => CheckStatus::error(format!("{} is not a directory", dir.display())),
        Err(e) => CheckStatus::error(format!("{}: {}", dir.display(), e)),
    }
}

/// Checks that the board directory yields mappings.
async fn check_board_directory(state: &AppState) -> CheckStatus {
    let directory = state.report_service.directory().await;
    if directory.is_empty() {
        CheckStatus::error(format!(
            "No boards mapped from {}",
            state.report_service.sources().directory_path.display()
        ))
    } else {
        CheckStatus::ok(format!("{} boards mapped", directory.len()))
    }
}

/// Reports the directory cache backend and occupancy.
async fn check_cache(state: &AppState) -> CheckStatus {
    let cached = state.cache.cached_files().await;
    let noun = if cached == 1 { "file" } else { "files" };
    CheckStatus::ok(format!(
        "{}, {} {} cached",
        state.cache.backend(),
        cached,
        noun
    ))
}
