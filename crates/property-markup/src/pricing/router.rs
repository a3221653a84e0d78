use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::codes::CodeTableName;
use super::companies::{is_known_company, management_companies, NO_COMPANY};
use super::engine::{MarkupOutcome, RuleEngine};
use super::fields::{OutputField, BULK_DISCOUNT_FLAG_COLUMN};
use super::submission::PropertySubmission;
use super::template::TemplatePlan;
use super::PricingError;

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub outcome: MarkupOutcome,
    pub plan: TemplatePlan,
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub field: &'static str,
    pub cell: String,
    pub echo: bool,
}

#[derive(Debug, Serialize)]
pub struct CodeOptionView {
    pub label: &'static str,
    pub code: u8,
}

#[derive(Debug, Serialize)]
pub struct CodeTableView {
    pub table: CodeTableName,
    pub label: &'static str,
    pub options: Vec<CodeOptionView>,
}

/// Router builder exposing quoting and the reference tables collectors need.
pub fn markup_router(engine: Arc<RuleEngine>) -> Router {
    Router::new()
        .route("/api/v1/markup/quote", post(quote_handler))
        .route("/api/v1/markup/fields", get(fields_handler))
        .route("/api/v1/markup/tables", get(tables_handler))
        .route("/api/v1/markup/companies", get(companies_handler))
        .with_state(engine)
}

pub(crate) async fn quote_handler(
    State(engine): State<Arc<RuleEngine>>,
    Json(submission): Json<PropertySubmission>,
) -> Response {
    if let Some(company) = off_roster_company(&submission) {
        warn!(company, "selected company is not on the discount roster");
    }

    match engine.compute(&submission) {
        Ok(outcome) => {
            let plan = TemplatePlan::build(&submission, &outcome, Local::now().date_naive());
            (StatusCode::OK, Json(QuoteResponse { outcome, plan })).into_response()
        }
        Err(error @ (PricingError::UnknownLabel { .. } | PricingError::InvalidInput(_))) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error @ PricingError::ScheduleFormat { .. }) => {
            warn!(%error, "discount schedule failed during quote");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// A chosen company that earns the flag but is missing from the roster.
fn off_roster_company(submission: &PropertySubmission) -> Option<&str> {
    let company = submission.selected_company.as_deref()?.trim();
    if company.is_empty() || company == NO_COMPANY || is_known_company(company) {
        return None;
    }
    Some(company)
}

pub(crate) async fn fields_handler() -> Json<Vec<FieldView>> {
    let fields = OutputField::ordered()
        .into_iter()
        .map(|field| FieldView {
            field: field.key(),
            cell: field
                .cell()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{BULK_DISCOUNT_FLAG_COLUMN}<row>")),
            echo: field.is_echo(),
        })
        .collect();
    Json(fields)
}

pub(crate) async fn tables_handler() -> Json<Vec<CodeTableView>> {
    let tables = CodeTableName::ordered()
        .into_iter()
        .map(|table| CodeTableView {
            table,
            label: table.label(),
            options: table
                .labels()
                .into_iter()
                .zip(1u8..)
                .map(|(label, code)| CodeOptionView { label, code })
                .collect(),
        })
        .collect();
    Json(tables)
}

pub(crate) async fn companies_handler() -> Json<serde_json::Value> {
    Json(json!({
        "none_sentinel": NO_COMPANY,
        "companies": management_companies(),
    }))
}
