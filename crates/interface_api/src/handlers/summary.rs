//! Dashboard summary handler

use axum::{extract::State, Json};

use domain_claims::{filter_counts, summarize_claims, validate_references};
use domain_policy::summarize_portfolio;

use crate::dto::summary::SummaryResponse;
use crate::{error::ApiError, AppState};

/// Portfolio and claims headline numbers
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let policies = state.port.list_policies().await?;
    let claims = state.port.list_claims().await?;
    validate_references(&policies, &claims)?;

    Ok(Json(SummaryResponse {
        portfolio: summarize_portfolio(&policies),
        claims: summarize_claims(&claims),
        claim_filters: filter_counts(&claims),
    }))
}
