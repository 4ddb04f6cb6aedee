//! HTTP tests for the portal API

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use core_kernel::AdapterHealth;
use domain_claims::ports::mock::MockPortalPort;
use domain_claims::PortalDataPort;
use infra_fixtures::FixturePortalAdapter;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{PortfolioFixtures, TestClaimBuilder};

fn server_with(port: Arc<dyn PortalDataPort>) -> TestServer {
    TestServer::new(create_router(port, ApiConfig::default())).expect("test server starts")
}

fn demo_server() -> TestServer {
    server_with(Arc::new(FixturePortalAdapter::bundled().expect("bundled fixture")))
}

// ============================================================================
// Health
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = demo_server().get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready() {
        let response = demo_server().get("/health/ready").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ready");
    }

    #[tokio::test]
    async fn test_unhealthy_port_is_not_ready() {
        let port = PortfolioFixtures::mock_port();
        port.set_health(AdapterHealth::Unhealthy).await;

        let server = server_with(Arc::new(port));
        server
            .get("/health/ready")
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
        server.get("/health").await.assert_status_ok();
    }
}

// ============================================================================
// Policies
// ============================================================================

mod policies {
    use super::*;

    #[tokio::test]
    async fn test_list_policies() {
        let body: Value = demo_server().get("/api/v1/policies").await.json();
        let policies = body.as_array().unwrap();

        assert_eq!(policies.len(), 4);
        assert_eq!(policies[0]["policyNumber"], "MTR-2024-00847");
        assert_eq!(policies[0]["typeLabel"], "Motor");
        assert_eq!(policies[0]["icon"], "directions_car");
        assert_eq!(policies[0]["statusLabel"], "Active");
        assert!(policies[0]["statusColour"].as_str().unwrap().contains("emerald"));
        assert_eq!(policies[3]["monthlyPremium"], 200);
    }

    #[tokio::test]
    async fn test_filter_policies_by_status() {
        let body: Value = demo_server()
            .get("/api/v1/policies")
            .add_query_param("status", "pending")
            .await
            .json();
        let policies = body.as_array().unwrap();
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0]["type"], "travel");
    }

    #[tokio::test]
    async fn test_unknown_policy_filter_is_bad_request() {
        let response = demo_server()
            .get("/api/v1/policies")
            .add_query_param("status", "lapsed")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_policy_detail_lists_claims_by_recency() {
        let body: Value = demo_server().get("/api/v1/policies/pol_001").await.json();

        assert_eq!(body["name"], "Comprehensive Motor Insurance");
        let numbers: Vec<&str> = body["claims"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["claimNumber"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, vec!["CLM-2025-08847", "CLM-2024-04521"]);
    }

    #[tokio::test]
    async fn test_unknown_policy_is_not_found() {
        let response = demo_server().get("/api/v1/policies/pol_999").await;
        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["error"], "not_found");
    }
}

// ============================================================================
// Claims
// ============================================================================

mod claims {
    use super::*;

    #[tokio::test]
    async fn test_list_claims_in_recency_order() {
        let body: Value = demo_server().get("/api/v1/claims").await.json();
        let numbers: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["claimNumber"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, vec!["CLM-2025-08847", "CLM-2025-07234", "CLM-2024-04521"]);
    }

    #[tokio::test]
    async fn test_claim_card_fields() {
        let body: Value = demo_server().get("/api/v1/claims").await.json();
        let card = &body[0];

        assert_eq!(card["statusLabel"], "Under Review");
        assert!(card["statusColour"].as_str().unwrap().contains("indigo"));
        assert_eq!(card["progress"]["fraction"], 0.5);
        assert_eq!(card["progress"]["completedSteps"], 3);
        assert_eq!(card["currentStep"], "Under Review");
        assert!(card.get("approvedAmount").is_none());
    }

    #[tokio::test]
    async fn test_active_filter() {
        let body: Value = demo_server()
            .get("/api/v1/claims")
            .add_query_param("filter", "active")
            .await
            .json();
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_policy_filter() {
        let body: Value = demo_server()
            .get("/api/v1/claims")
            .add_query_param("policy_id", "pol_002")
            .await
            .json();
        let claims = body.as_array().unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0]["approvedAmount"], 29500);
    }

    #[tokio::test]
    async fn test_unknown_claim_filter_is_bad_request() {
        demo_server()
            .get("/api/v1/claims")
            .add_query_param("filter", "closed")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_claim_detail_timeline() {
        let body: Value = demo_server().get("/api/v1/claims/clm_001").await.json();
        let timeline = body["timeline"].as_array().unwrap();

        assert_eq!(timeline.len(), 6);
        assert_eq!(timeline[0]["visualState"], "completed");
        assert_eq!(timeline[0]["icon"], "check_circle");
        assert_eq!(timeline[3]["highlighted"], true);
        assert_eq!(timeline[4]["date"], Value::Null);
        assert_eq!(timeline[4]["icon"], "gavel");
        assert_eq!(body["nextAction"]["title"], "Under Review");
        assert_eq!(body["documents"][0]["icon"], "picture_as_pdf");
        assert_eq!(body["documents"][1]["icon"], "folder_zip");
    }

    #[tokio::test]
    async fn test_completed_claim_has_no_next_action() {
        let body: Value = demo_server().get("/api/v1/claims/clm_002").await.json();
        assert_eq!(body["nextAction"], Value::Null);
        assert_eq!(body["progress"]["fraction"], 1.0);
    }

    #[tokio::test]
    async fn test_unknown_claim_is_not_found() {
        demo_server()
            .get("/api/v1/claims/clm_999")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_invalid_upstream_claim_is_server_error() {
        let mut claim = TestClaimBuilder::new().with_id("clm_bad").build();
        claim.status = domain_claims::ClaimStatus::Rejected;
        claim.approved_amount = Some(core_kernel::Rand::from_whole(10));
        let port = MockPortalPort::with_data(PortfolioFixtures::policies(), vec![claim]);

        let response = server_with(Arc::new(port)).get("/api/v1/claims/clm_bad").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["error"], "integrity_error");
    }
}

// ============================================================================
// Summary
// ============================================================================

mod summary {
    use super::*;

    #[tokio::test]
    async fn test_summary() {
        let body: Value = demo_server().get("/api/v1/summary").await.json();

        assert_eq!(body["portfolio"]["activePolicies"], 3);
        assert_eq!(body["portfolio"]["totalMonthlyPremium"], 3480);
        assert_eq!(body["claims"]["activeClaims"], 1);
        assert_eq!(body["claims"]["totalPaid"], 4500);
        assert_eq!(body["claimFilters"][0]["label"], "All Claims");
        assert_eq!(body["claimFilters"][0]["count"], 3);
    }

    #[tokio::test]
    async fn test_dangling_reference_is_server_error() {
        let claim = TestClaimBuilder::new().build();
        let port = MockPortalPort::with_data(vec![], vec![claim]);

        let response = server_with(Arc::new(port)).get("/api/v1/summary").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains("unknown policy"));
    }
}
