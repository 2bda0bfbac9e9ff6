use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

use super::domain::{Insight, LeadRecord};
use super::email::guess_email;
use super::import::LeadCsvImporter;
use super::report::LeadBatchReport;
use super::views::{DisplayValue, LeadDisplay};
use super::workflow::LeadWorkflow;

/// Router exposing lead scoring, email guessing, and CSV batch scoring.
pub fn lead_router() -> Router {
    Router::new()
        .route("/api/v1/leads/insight", post(insight_handler))
        .route("/api/v1/leads/email-guess", post(email_guess_handler))
        .route("/api/v1/leads/import", post(import_handler))
}

#[derive(Debug, Serialize)]
pub struct LeadInsightResponse {
    pub email: DisplayValue,
    pub insight: Insight,
    pub display: LeadDisplay,
    pub computed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct EmailGuessRequest {
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LeadImportRequest {
    pub csv: String,
}

pub(crate) async fn insight_handler(Json(record): Json<LeadRecord>) -> Json<LeadInsightResponse> {
    let evaluation = LeadWorkflow::evaluate(&record);
    let display = evaluation.display(&record);

    Json(LeadInsightResponse {
        email: evaluation.email,
        insight: evaluation.insight,
        display,
        computed_at: Utc::now(),
    })
}

pub(crate) async fn email_guess_handler(
    Json(request): Json<EmailGuessRequest>,
) -> Json<serde_json::Value> {
    let email_guess = guess_email(request.contact_name.trim(), request.company_name.trim());
    Json(json!({ "email_guess": email_guess }))
}

pub(crate) async fn import_handler(Json(request): Json<LeadImportRequest>) -> Response {
    let reader = Cursor::new(request.csv.into_bytes());
    match LeadCsvImporter::from_reader(reader) {
        Ok(records) => {
            let report = LeadBatchReport::from_records(&records);
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
