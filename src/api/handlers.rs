//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::{AppState, CommitOutcome, Phase},
    view::ClockView,
};
use super::responses::{
    ApiResponse, DurationRequest, FeedbackRequest, HealthResponse, StatusResponse,
};

/// Handle POST /toggle - Start/stop button
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle_run() {
        Ok(snapshot) => {
            info!("Toggle endpoint called - running={}", snapshot.clock.is_running);
            let message = if snapshot.clock.is_running {
                "Timer started"
            } else {
                "Timer stopped"
            };
            Ok(Json(ApiResponse::for_snapshot(message.to_string(), snapshot)))
        }
        Err(e) => {
            error!("Failed to toggle timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /duration/:phase - Slider commit
pub async fn duration_handler(
    State(state): State<Arc<AppState>>,
    Path(phase_name): Path<String>,
    Json(request): Json<DurationRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), StatusCode> {
    let Some(phase) = Phase::from_name(&phase_name) else {
        warn!("Unknown phase in duration request: {}", phase_name);
        return Err(StatusCode::NOT_FOUND);
    };

    match state.commit_duration(phase, request.minutes) {
        Ok(CommitOutcome::Applied(snapshot)) => {
            let minutes = snapshot.config.duration_of(phase) / 60;
            Ok((
                StatusCode::OK,
                Json(ApiResponse::for_snapshot(
                    format!("{} duration set to {} min", phase.as_str(), minutes),
                    snapshot,
                )),
            ))
        }
        Ok(CommitOutcome::Locked(snapshot)) => Ok((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "Durations are locked while the timer is running".to_string(),
                snapshot,
            )),
        )),
        Err(e) => {
            error!("Failed to commit {} duration: {}", phase.as_str(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /feedback/:channel - Haptics and sounds toggles
pub async fn feedback_handler(
    State(state): State<Arc<AppState>>,
    Path(channel): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let result = match channel.as_str() {
        "haptic" => state.set_haptic_enabled(request.enabled),
        "sound" => state.set_sound_enabled(request.enabled),
        other => {
            warn!("Unknown feedback channel: {}", other);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    match result {
        Ok(snapshot) => Ok(Json(ApiResponse::for_snapshot(
            format!(
                "{} feedback {}",
                channel,
                if request.enabled { "enabled" } else { "disabled" }
            ),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to update {} feedback: {}", channel, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current clock and view
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get clock snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        view: ClockView::from_snapshot(&snapshot),
        snapshot,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
