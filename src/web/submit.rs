use crate::bot::report::{render_report, ReportContext};
use crate::domain::stats::DerivedStats;
use crate::domain::submission::{SubmissionError, SubmissionRequest};
use crate::services::telegram::DeliveryOutcome;
use crate::state::SharedState;
use crate::time_utils;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl ApiResponse {
    fn accepted(message: &'static str, telegram_sent: bool) -> Self {
        Self {
            success: true,
            message: Some(message),
            telegram_sent: Some(telegram_sent),
            error: None,
        }
    }

    fn failure(error: &'static str) -> Self {
        Self {
            success: false,
            message: None,
            telegram_sent: None,
            error: Some(error),
        }
    }
}

/// Decode, score and render one submission.
fn build_report(state: &SharedState, body: &[u8]) -> Result<String, SubmissionError> {
    let request = SubmissionRequest::from_slice(body)?;
    let stats = DerivedStats::compute(&request)?;
    tracing::info!(
        "Submission from {}: {}/{} correct, accuracy {}%",
        request.name,
        stats.correct_count,
        request.total,
        stats.accuracy
    );

    let (date, time) =
        time_utils::format_report_datetime(state.config.report_zone, chrono::Utc::now());
    let ctx = ReportContext::new(&state.config.report_title, &request, stats, &date, &time);
    Ok(render_report(&ctx))
}

fn internal_error(e: SubmissionError) -> Response {
    tracing::error!("Failed to process submission: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure("Internal server error")),
    )
        .into_response()
}

pub async fn submit_report(
    method: Method,
    State(state): State<SharedState>,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ApiResponse::failure("Method not allowed")),
        )
            .into_response();
    }

    let submission_id = Uuid::new_v4();
    async move {
        // Without credentials nothing is scored or rendered, only the body shape is checked.
        let outcome = if state.notifier.is_configured() {
            let report = match build_report(&state, &body) {
                Ok(report) => report,
                Err(e) => return internal_error(e),
            };
            state.notifier.deliver(&report).await
        } else {
            if let Err(e) = SubmissionRequest::check_body(&body) {
                return internal_error(e);
            }
            tracing::warn!("Telegram credentials not set, skipping report");
            DeliveryOutcome::SkippedNoConfig
        };

        (
            StatusCode::OK,
            Json(ApiResponse::accepted(outcome.message(), outcome.telegram_sent())),
        )
            .into_response()
    }
    .instrument(tracing::info_span!("submission", %submission_id))
    .await
}
