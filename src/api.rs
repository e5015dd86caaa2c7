// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Assessment API
 * Stateless HTTP surface for the analytics engine: every request carries
 * the full selection, nothing is stored between calls
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::analytics::compute_analytics;
use crate::catalog::{controls, frameworks};
use crate::reporting::{ReportConfig, ReportEngine, ReportFormat};
use crate::types::Selection;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{error, info};

pub struct ApiState {
    pub engine: Arc<ReportEngine>,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(ReportEngine::new()),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/v1/frameworks", get(list_frameworks_handler))
        .route("/api/v1/controls", get(list_controls_handler))
        .route("/api/v1/assess", post(assess_handler))
        .route("/api/v1/report", post(generate_report_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    error: String,
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            status: "error",
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn list_frameworks_handler() -> impl IntoResponse {
    Json(frameworks::all_frameworks())
}

#[derive(Debug, Deserialize)]
struct ControlsQuery {
    /// Comma-separated framework ids
    frameworks: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ControlsResponse {
    controls: Vec<String>,
    /// Which frameworks require each returned control
    control_frameworks: BTreeMap<String, Vec<String>>,
}

/// Applicable controls for a set of framework ids, sorted ascending.
/// Unknown ids are skipped, matching the analytics engine.
async fn list_controls_handler(Query(query): Query<ControlsQuery>) -> impl IntoResponse {
    let by_framework = controls::controls_by_framework();
    let reverse = controls::frameworks_by_control();

    let mut applicable: BTreeSet<&str> = BTreeSet::new();
    for framework_id in query.frameworks.split(',').map(str::trim) {
        if let Some(set_name) = frameworks::control_set_name(framework_id) {
            if let Some(framework_controls) = by_framework.get(set_name) {
                applicable.extend(framework_controls.iter().copied());
            }
        }
    }

    let control_frameworks: BTreeMap<String, Vec<String>> = applicable
        .iter()
        .map(|control| {
            let mut names: Vec<String> = reverse
                .get(control)
                .map(|fws| fws.iter().map(|f| f.to_string()).collect())
                .unwrap_or_default();
            names.sort();
            (control.to_string(), names)
        })
        .collect();

    Json(ControlsResponse {
        controls: applicable.iter().map(|c| c.to_string()).collect(),
        control_frameworks,
    })
}

/// Dashboard data: the full analytics snapshot for one selection
async fn assess_handler(Json(selection): Json<Selection>) -> Response {
    if !selection.is_complete() {
        return bad_request("No assessment data available");
    }
    info!(
        frameworks = selection.selected_frameworks.len(),
        controls = selection.selected_controls.len(),
        "computing assessment"
    );
    Json(compute_analytics(&selection)).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest {
    #[serde(flatten)]
    selection: Selection,
    #[serde(default)]
    format: Option<ReportFormat>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DownloadReportResponse {
    status: &'static str,
    html_content: String,
    filename: String,
    download_time: String,
}

/// Downloadable assessment report. HTML reports are wrapped in a JSON
/// envelope for browser-side download handling; other formats stream the
/// rendered document directly.
async fn generate_report_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ReportRequest>,
) -> Response {
    let format = request.format.unwrap_or(ReportFormat::Html);
    let config = ReportConfig {
        format,
        branding: None,
    };

    let output = match state.engine.generate_report(&request.selection, config).await {
        Ok(output) => output,
        Err(err) => {
            error!("report generation failed: {err}");
            return bad_request(&err.to_string());
        }
    };

    match format {
        ReportFormat::Html => {
            let html_content = String::from_utf8_lossy(&output.data).into_owned();
            Json(DownloadReportResponse {
                status: "success",
                html_content,
                filename: output.filename,
                download_time: Local::now().format("%B %d, %Y at %I:%M %p").to_string(),
            })
            .into_response()
        }
        ReportFormat::Json | ReportFormat::Markdown => (
            [
                (header::CONTENT_TYPE, output.mime_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", output.filename),
                ),
            ],
            output.data,
        )
            .into_response(),
    }
}
