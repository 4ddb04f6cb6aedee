//! Tests for the shared status vocabulary

use core_kernel::{status_colour_class, status_label, StatusDisplay, StatusTone};

#[derive(Debug, Clone, Copy)]
enum Light {
    Green,
    Red,
}

impl StatusDisplay for Light {
    fn code(&self) -> &'static str {
        match self {
            Light::Green => "green",
            Light::Red => "red",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Light::Green => "Go",
            Light::Red => "Stop",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Light::Green => StatusTone::Success,
            Light::Red => StatusTone::Error,
        }
    }
}

#[test]
fn test_label_delegates_to_status() {
    assert_eq!(status_label(Light::Green), "Go");
    assert_eq!(status_label(Light::Red), "Stop");
}

#[test]
fn test_colour_comes_from_tone_table() {
    assert_eq!(status_colour_class(Light::Green), StatusTone::Success.colour_class());
    assert!(status_colour_class(Light::Red).contains("text-red-600"));
}

#[test]
fn test_tone_names() {
    let names: Vec<&str> = StatusTone::ALL.iter().map(StatusTone::as_str).collect();
    assert_eq!(names, vec!["success", "warning", "neutral", "error", "info", "review"]);
}

#[test]
fn test_tone_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&StatusTone::Review).unwrap(), "\"review\"");
}
