//! Tests for the fixture adapter

use rust_decimal_macros::dec;

use core_kernel::{AdapterHealth, ClaimId, HealthCheckable, PolicyId};
use domain_claims::{progress_fraction, sort_claims_by_recency, ClaimStatus, PortalDataPort};
use infra_fixtures::{FixtureError, FixturePortalAdapter, PortalFixture};

const BUNDLED: &str = include_str!("../fixtures/portal.json");

fn bundled() -> FixturePortalAdapter {
    FixturePortalAdapter::bundled().expect("bundled fixture is valid")
}

/// Bundled document with one substitution applied
fn patched(from: &str, to: &str) -> String {
    assert!(BUNDLED.contains(from), "fixture does not contain {from}");
    BUNDLED.replacen(from, to, 1)
}

// ============================================================================
// Bundled portfolio
// ============================================================================

mod bundled_portfolio {
    use super::*;

    #[tokio::test]
    async fn test_bundled_counts() {
        let adapter = bundled();
        assert_eq!(adapter.list_policies().await.unwrap().len(), 4);
        assert_eq!(adapter.list_claims().await.unwrap().len(), 3);
        assert_eq!(adapter.source(), "bundled");
    }

    #[tokio::test]
    async fn test_motor_claim_loaded() {
        let claim = bundled().get_claim(&ClaimId::new("clm_001")).await.unwrap();

        assert_eq!(claim.claim_number, "CLM-2025-08847");
        assert_eq!(claim.status, ClaimStatus::UnderReview);
        assert_eq!(claim.timeline.len(), 6);
        assert_eq!(progress_fraction(&claim), 0.5);
        assert!(claim.timeline.events()[4].date.is_none());
        assert_eq!(claim.document_count(), 3);
    }

    #[tokio::test]
    async fn test_home_claim_loaded() {
        let claim = bundled().get_claim(&ClaimId::new("clm_002")).await.unwrap();

        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(29500));
        assert_eq!(progress_fraction(&claim), 1.0);
    }

    #[tokio::test]
    async fn test_claims_for_policy() {
        let claims = bundled()
            .claims_for_policy(&PolicyId::new("pol_001"))
            .await
            .unwrap();
        let numbers: Vec<&str> = sort_claims_by_recency(&claims)
            .into_iter()
            .map(|c| c.claim_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["CLM-2025-08847", "CLM-2024-04521"]);
    }

    #[tokio::test]
    async fn test_unknown_ids_not_found() {
        let adapter = bundled();
        assert!(adapter.get_policy(&PolicyId::new("pol_999")).await.unwrap_err().is_not_found());
        assert!(adapter.get_claim(&ClaimId::new("clm_999")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_health_check() {
        let health = bundled().health_check().await;
        assert_eq!(health.status, AdapterHealth::Healthy);
        assert_eq!(health.message.as_deref(), Some("4 policies, 3 claims"));
    }
}

// ============================================================================
// Load-time validation
// ============================================================================

mod validation {
    use super::*;

    #[test]
    fn test_dangling_policy_reference_rejected() {
        let json = patched("\"policyId\": \"pol_002\"", "\"policyId\": \"pol_404\"");
        let err = FixturePortalAdapter::from_json_str(&json).unwrap_err();

        assert!(matches!(err, FixtureError::Integrity(_)));
        assert!(err.to_string().contains("pol_404"));
    }

    #[test]
    fn test_rejected_claim_with_approved_amount_rejected() {
        let json = patched("\"status\": \"approved\",\n      \"amount\": 32000", "\"status\": \"rejected\",\n      \"amount\": 32000");
        let err = FixturePortalAdapter::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("must not carry an approved amount"));
    }

    #[test]
    fn test_duplicate_policy_id_rejected() {
        let json = patched("\"id\": \"pol_003\"", "\"id\": \"pol_002\"");
        let err = FixturePortalAdapter::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate policy id pol_002"));
    }

    #[test]
    fn test_reversed_policy_term_rejected() {
        let json = patched("\"endDate\": \"2025-01-14\"", "\"endDate\": \"2023-01-14\"");
        assert!(FixturePortalAdapter::from_json_str(&json).unwrap_err().is_data_error());
    }

    #[test]
    fn test_misordered_timeline_is_a_parse_error() {
        let json = patched("\"status\": \"completed\"", "\"status\": \"pending\"");
        let err = FixturePortalAdapter::from_json_str(&json).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_amounts_rejected() {
        let huge = "60000000000000000000000000000";
        let json = patched("\"amount\": 45000", &format!("\"amount\": {huge}"))
            .replacen("\"amount\": 32000", &format!("\"amount\": {huge}"), 1);

        let err = FixturePortalAdapter::from_json_str(&json).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn test_largest_amounts_summarise_without_panicking() {
        let max = core_kernel::Rand::MAX_UNITS;
        let json = patched("\"amount\": 45000", &format!("\"amount\": {max}"))
            .replacen("\"amount\": 32000", &format!("\"amount\": {max}"), 1);

        let fixture = PortalFixture::from_json(&json).unwrap();
        let summary = domain_claims::summarize_claims(&fixture.claims);
        assert_eq!(summary.total_claims, 3);
        assert!(summary.total_claimed > core_kernel::Rand::from_whole(max));
    }

    #[test]
    fn test_malformed_json() {
        let err = FixturePortalAdapter::from_json_str("{ \"policies\": [").unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn test_empty_document_is_valid() {
        let adapter = FixturePortalAdapter::from_json_str("{}").unwrap();
        assert!(adapter.fixture().policies.is_empty());
        assert_eq!(adapter.fixture(), &PortalFixture::default());
    }
}

// ============================================================================
// File loading
// ============================================================================

mod file_loading {
    use super::*;

    #[tokio::test]
    async fn test_load_from_path() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/portal.json");
        let adapter = FixturePortalAdapter::load_from_path(path).await.unwrap();
        assert_eq!(adapter.source(), path);
        assert_eq!(adapter.list_claims().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = FixturePortalAdapter::load_from_path("/nonexistent/portal.json")
            .await
            .unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_port_error_mapping() {
        let err: core_kernel::PortError = FixtureError::integrity("bad").into();
        assert!(matches!(err, core_kernel::PortError::Validation { .. }));
    }
}
