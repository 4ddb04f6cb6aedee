//! Policy entity tests
//!
//! Covers the wire format of upstream policy records, status vocabulary,
//! and validation of policy invariants.

use chrono::NaiveDate;
use core_kernel::{status_colour_class, status_label, InsuredItemId, PolicyId, Rand, StatusDisplay, StatusTone};
use domain_policy::{InsuredItem, Policy, PolicyError, PolicyStatus, PolicyType, PremiumFrequency};
use rust_decimal_macros::dec;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const HOME_POLICY_JSON: &str = r#"{
    "id": "pol_002",
    "type": "home",
    "name": "Home Contents Insurance",
    "policyNumber": "HME-2024-01293",
    "status": "active",
    "premium": 980,
    "frequency": "monthly",
    "nextPayment": "2026-02-01",
    "startDate": "2024-02-01",
    "endDate": "2025-01-31",
    "coverAmount": 850000,
    "excess": 2000,
    "description": "Protect your home contents against theft, fire, and natural disasters.",
    "features": [
        "All-risk cover for valuables",
        "Accidental damage protection",
        "Fire and explosion cover"
    ],
    "insuredItems": [
        { "id": "item_002", "name": "Household Contents", "value": 650000 },
        { "id": "item_003", "name": "All-Risk Items (Laptop, Phone, Watch)", "value": 85000 }
    ]
}"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_test_policy() -> Policy {
    serde_json::from_str(HOME_POLICY_JSON).expect("fixture should parse")
}

mod wire_format {
    use super::*;

    #[test]
    fn test_parses_upstream_record() {
        let policy = create_test_policy();

        assert_eq!(policy.id, PolicyId::new("pol_002"));
        assert_eq!(policy.policy_type, PolicyType::Home);
        assert_eq!(policy.status, PolicyStatus::Active);
        assert_eq!(policy.frequency, PremiumFrequency::Monthly);
        assert_eq!(policy.premium, Rand::from_whole(980));
        assert_eq!(policy.cover_amount, Rand::from_whole(850000));
        assert_eq!(policy.start_date, date(2024, 2, 1));
        assert_eq!(policy.insured_items.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_feature_order_is_preserved() {
        let policy = create_test_policy();
        assert_eq!(policy.features[0], "All-risk cover for valuables");
        assert_eq!(policy.features[2], "Fire and explosion cover");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = HOME_POLICY_JSON.replace("\"home\"", "\"pet\"");
        assert!(serde_json::from_str::<Policy>(&json).is_err());
    }

    #[test]
    fn test_negative_excess_rejected() {
        let json = HOME_POLICY_JSON.replace("\"excess\": 2000", "\"excess\": -2000");
        assert!(serde_json::from_str::<Policy>(&json).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(create_test_policy()).unwrap();
        assert_eq!(value["policyNumber"], "HME-2024-01293");
        assert_eq!(value["coverAmount"], 850000);
        assert_eq!(value["type"], "home");
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_valid_policy_passes() {
        assert!(create_test_policy().validate().is_ok());
    }

    #[test]
    fn test_end_before_start_fails() {
        let mut policy = create_test_policy();
        policy.end_date = date(2024, 1, 31);

        let err = policy.validate().unwrap_err();
        assert!(matches!(err, PolicyError::Temporal { .. }));
        assert!(err.to_string().contains("pol_002"));
    }

    #[test]
    fn test_same_day_term_is_valid() {
        let mut policy = create_test_policy();
        policy.end_date = policy.start_date;
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_duplicate_insured_items_fail() {
        let mut policy = create_test_policy();
        policy.insured_items = Some(vec![
            InsuredItem {
                id: InsuredItemId::new("item_009"),
                name: "Bicycle".to_string(),
                value: Rand::from_whole(15000),
                description: None,
            },
            InsuredItem {
                id: InsuredItemId::new("item_009"),
                name: "Camera".to_string(),
                value: Rand::from_whole(12000),
                description: None,
            },
        ]);

        assert!(matches!(policy.validate(), Err(PolicyError::InvalidPolicy { .. })));
    }
}

mod derived_values {
    use super::*;

    #[test]
    fn test_total_insured_value() {
        assert_eq!(create_test_policy().total_insured_value(), Rand::from_whole(735000));
    }

    #[test]
    fn test_total_insured_value_without_items() {
        let mut policy = create_test_policy();
        policy.insured_items = None;
        assert!(policy.total_insured_value().is_zero());
    }

    #[test]
    fn test_monthly_premium_for_annual_policy() {
        let mut policy = create_test_policy();
        policy.frequency = PremiumFrequency::Annually;
        policy.premium = Rand::from_whole(2400);
        assert_eq!(policy.monthly_premium().amount(), dec!(200));
    }

    #[test]
    fn test_covers_is_inclusive() {
        let policy = create_test_policy();
        assert!(policy.covers(date(2024, 2, 1)));
        assert!(policy.covers(date(2025, 1, 31)));
        assert!(!policy.covers(date(2025, 2, 1)));
    }
}

mod status_vocabulary {
    use super::*;

    #[test]
    fn test_every_status_has_label_and_colour() {
        for status in PolicyStatus::ALL {
            assert!(!status_label(status).is_empty());
            assert!(!status_colour_class(status).is_empty());
            assert_eq!(status.code().parse::<PolicyStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_tones() {
        assert_eq!(PolicyStatus::Active.tone(), StatusTone::Success);
        assert_eq!(PolicyStatus::Pending.tone(), StatusTone::Warning);
        assert_eq!(PolicyStatus::Expired.tone(), StatusTone::Neutral);
        assert_eq!(PolicyStatus::Cancelled.tone(), StatusTone::Error);
    }

    #[test]
    fn test_policy_type_icons_and_labels() {
        let icons: Vec<&str> = PolicyType::ALL.iter().map(PolicyType::icon).collect();
        assert_eq!(icons, vec!["directions_car", "home", "favorite", "business", "flight"]);
        assert_eq!(PolicyType::Travel.label(), "Travel");
        assert_eq!("business".parse::<PolicyType>().unwrap(), PolicyType::Business);
    }
}
