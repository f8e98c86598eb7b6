//! Configuration options for distance conversion

use std::time::Duration;

use crate::conversion::ConversionDirection;
use crate::formatter::OutputFormat;

/// Default quiet period before an input change triggers a conversion
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Longest debounce interval accepted
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

/// Converter configuration options
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Direction selected when a session starts
    pub direction: ConversionDirection,
    /// Quiet period before an input change is converted
    pub debounce: Duration,
    /// Output rendering
    pub output_format: OutputFormat,
    /// Style terminal output
    pub color: bool,
    /// Suppress non-error output
    pub quiet: bool,
    /// Keep going when a batch line fails
    pub continue_on_error: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            direction: ConversionDirection::KmToMiles,
            debounce: DEFAULT_DEBOUNCE,
            output_format: OutputFormat::Text,
            color: false,
            quiet: false,
            continue_on_error: false,
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for scripted use: JSON lines, no color, keep going on errors
    pub fn scripted() -> Self {
        Self {
            output_format: OutputFormat::Json,
            color: false,
            continue_on_error: true,
            ..Default::default()
        }
    }

    /// Set the starting direction
    pub fn with_direction(mut self, direction: ConversionDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the debounce interval
    pub fn with_debounce(mut self, debounce: Duration) -> Result<Self, String> {
        if debounce.is_zero() || debounce > MAX_DEBOUNCE {
            return Err("Debounce must be between 1ms and 10s".to_string());
        }
        self.debounce = debounce;
        Ok(self)
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable/disable colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable/disable quiet mode
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Continue batch processing after a failing line
    pub fn with_continue_on_error(mut self, enabled: bool) -> Self {
        self.continue_on_error = enabled;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.debounce.is_zero() || self.debounce > MAX_DEBOUNCE {
            return Err("Debounce must be between 1ms and 10s".to_string());
        }

        // Escape codes would corrupt JSON lines
        if self.color && self.output_format == OutputFormat::Json {
            return Err("Colored output is not available with JSON format".to_string());
        }

        Ok(())
    }
}
