//! Core conversion engine for distance conversion

use serde::Serialize;
use tracing::debug;

use crate::conversion::{ConversionDirection, ConversionResult};
use crate::error::ErrorKind;
use crate::formatter::{format_fixed, format_number, OUTPUT_DECIMALS};
use crate::parser::parse_numeric_prefix;

/// A single conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub direction: ConversionDirection,
}

impl ConversionRequest {
    /// Create a new request
    pub fn new(raw_input: impl Into<String>, direction: ConversionDirection) -> Self {
        Self {
            raw_input: raw_input.into(),
            direction,
        }
    }
}

/// A successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub input_value: f64,
    pub output_value: f64,
    pub direction: ConversionDirection,
}

impl Conversion {
    /// Converted value rounded to four decimals
    pub fn formatted_output(&self) -> String {
        format_fixed(self.output_value, OUTPUT_DECIMALS)
    }

    /// Summary line, e.g. `10 km = 6.2137 miles`
    pub fn display(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_number(self.input_value),
            self.direction.from_unit(),
            self.formatted_output(),
            self.direction.to_unit()
        )
    }

    /// Formula line, e.g. `10 km × 0.621371 = 6.2137 miles`
    pub fn formula(&self) -> String {
        format!(
            "{} {} × {} = {} {}",
            format_number(self.input_value),
            self.direction.from_unit(),
            self.direction.factor_literal(),
            self.formatted_output(),
            self.direction.to_unit()
        )
    }
}

/// Main conversion engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new() -> Self {
        Self
    }

    /// Convert raw input text in the given direction
    pub fn convert(&self, raw_input: &str, direction: ConversionDirection) -> ConversionResult {
        let input_value = self.validate_input(raw_input)?;
        let output_value = input_value * direction.factor();

        debug!(
            input = input_value,
            output = output_value,
            direction = direction.as_str(),
            "converted distance"
        );

        Ok(Conversion {
            input_value,
            output_value,
            direction,
        })
    }

    /// Convert a prepared request
    pub fn convert_request(&self, request: &ConversionRequest) -> ConversionResult {
        self.convert(&request.raw_input, request.direction)
    }

    /// Parse and validate input text
    fn validate_input(&self, raw_input: &str) -> Result<f64, ErrorKind> {
        let value = match parse_numeric_prefix(raw_input) {
            Some(value) if !value.is_nan() => value,
            _ => {
                debug!(input = raw_input, "rejected non-numeric input");
                return Err(ErrorKind::invalid_number(raw_input));
            }
        };

        if value < 0.0 {
            debug!(value, "rejected negative input");
            return Err(ErrorKind::negative_value(value));
        }

        // Normalise negative zero
        Ok(if value == 0.0 { 0.0 } else { value })
    }
}

/// Convert raw input text in the given direction
pub fn convert(raw_input: &str, direction: ConversionDirection) -> ConversionResult {
    ConversionEngine::new().convert(raw_input, direction)
}
