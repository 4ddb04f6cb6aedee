//! Policy handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use core_kernel::PolicyId;
use domain_claims::sort_claims_by_recency;
use domain_policy::PolicyStatusFilter;

use crate::dto::claims::ClaimCard;
use crate::dto::policy::*;
use crate::{error::ApiError, AppState};

/// Lists policies, optionally filtered by status
pub async fn list_policies(
    State(state): State<AppState>,
    Query(query): Query<PolicyListQuery>,
) -> Result<Json<Vec<PolicyView>>, ApiError> {
    let filter = match query.status.as_deref() {
        Some(raw) => raw.parse::<PolicyStatusFilter>()?,
        None => PolicyStatusFilter::All,
    };

    let policies = state.port.list_policies().await?;
    let views: Vec<PolicyView> = policies
        .into_iter()
        .filter(|p| filter.matches(p.status))
        .map(PolicyView::from)
        .collect();

    debug!(filter = %filter, count = views.len(), "Listed policies");
    Ok(Json(views))
}

/// Gets a policy with its claims
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyDetail>, ApiError> {
    let id = PolicyId::new(id);
    let policy = state.port.get_policy(&id).await?;
    let claims = state.port.claims_for_policy(&id).await?;

    let cards = sort_claims_by_recency(&claims)
        .into_iter()
        .map(ClaimCard::from)
        .collect();

    Ok(Json(PolicyDetail {
        policy: PolicyView::from(policy),
        claims: cards,
    }))
}
