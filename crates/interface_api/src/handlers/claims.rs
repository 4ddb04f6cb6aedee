//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use core_kernel::{ClaimId, PolicyId};
use domain_claims::{sort_claims_by_recency, ClaimStatusFilter};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Lists claims, most recently updated first
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ClaimListQuery>,
) -> Result<Json<Vec<ClaimCard>>, ApiError> {
    let filter = match query.filter.as_deref() {
        Some(raw) => raw.parse::<ClaimStatusFilter>()?,
        None => ClaimStatusFilter::All,
    };

    let claims = match query.policy_id {
        Some(policy_id) => state.port.claims_for_policy(&PolicyId::new(policy_id)).await?,
        None => state.port.list_claims().await?,
    };

    let cards: Vec<ClaimCard> = sort_claims_by_recency(filter.apply(&claims))
        .into_iter()
        .map(ClaimCard::from)
        .collect();

    debug!(filter = %filter, count = cards.len(), "Listed claims");
    Ok(Json(cards))
}

/// Gets a claim with its full timeline
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimDetail>, ApiError> {
    let claim = state.port.get_claim(&ClaimId::new(id)).await?;
    claim.validate()?;
    Ok(Json(ClaimDetail::from(&claim)))
}
