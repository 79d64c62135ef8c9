//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{state::ClockSnapshot, view::ClockView};

/// Body of a slider commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    pub minutes: u32,
}

/// Body of a feedback toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub enabled: bool,
}

/// API response structure for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub snapshot: ClockSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: &str, message: String, snapshot: ClockSnapshot) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            snapshot,
        }
    }

    /// Create a running response
    pub fn running(message: String, snapshot: ClockSnapshot) -> Self {
        Self::new("running", message, snapshot)
    }

    /// Create a stopped response
    pub fn stopped(message: String, snapshot: ClockSnapshot) -> Self {
        Self::new("stopped", message, snapshot)
    }

    /// Pick running/stopped from the snapshot
    pub fn for_snapshot(message: String, snapshot: ClockSnapshot) -> Self {
        if snapshot.clock.is_running {
            Self::running(message, snapshot)
        } else {
            Self::stopped(message, snapshot)
        }
    }

    /// Create an error response
    pub fn error(message: String, snapshot: ClockSnapshot) -> Self {
        Self::new("error", message, snapshot)
    }
}

/// Full status with the rendered view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub snapshot: ClockSnapshot,
    pub view: ClockView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
