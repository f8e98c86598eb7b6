//! JSON output records

use serde::Serialize;

use crate::conversion::{ConversionDirection, ConversionResult};
use crate::session::ResultView;

/// One line of JSON output describing a conversion or a session view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<ConversionDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JsonRecord {
    /// Build a record from a conversion outcome
    pub fn from_outcome(
        raw_input: &str,
        direction: ConversionDirection,
        outcome: &ConversionResult,
    ) -> Self {
        match outcome {
            Ok(conversion) => Self {
                input: Some(raw_input.to_string()),
                direction: Some(direction),
                // Infinite values have no JSON representation
                value: Some(conversion.output_value).filter(|v| v.is_finite()),
                display: Some(conversion.display()),
                formula: Some(conversion.formula()),
                error: None,
                message: None,
            },
            Err(kind) => Self {
                input: Some(raw_input.to_string()),
                direction: Some(direction),
                value: None,
                display: None,
                formula: None,
                error: Some(kind.code()),
                message: Some(kind.user_message().to_string()),
            },
        }
    }

    /// Build a record from the session's current result slot
    pub fn from_view(view: &ResultView) -> Self {
        Self {
            input: None,
            direction: None,
            value: view.value.filter(|v| v.is_finite()),
            display: Some(view.display.clone()),
            formula: view.formula.clone(),
            error: view.error_code,
            message: view.error.clone(),
        }
    }

    /// Serialize as a single JSON line
    pub fn to_json_line(&self) -> String {
        // A record of strings and finite floats always serializes
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"error\":\"serialization\",\"message\":\"{}\"}}", e)
        })
    }
}
