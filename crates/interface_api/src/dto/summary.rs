//! Dashboard summary DTO

use serde::Serialize;

use domain_claims::{ClaimsSummary, FilterCount};
use domain_policy::PortfolioSummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub portfolio: PortfolioSummary,
    pub claims: ClaimsSummary,
    pub claim_filters: Vec<FilterCount>,
}
