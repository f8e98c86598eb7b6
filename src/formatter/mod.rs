//! Result formatting module
//!
//! Numbers are rendered the way the converter has always shown them: the
//! converted value with fixed four decimals, the entered value in its shortest
//! round-trip form.

pub mod json;

pub use json::JsonRecord;

use crate::conversion::Conversion;
use crate::session::ResultView;
use console::style;

/// Decimal places used for converted values
pub const OUTPUT_DECIMALS: usize = 4;

/// Output rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary and formula lines
    Text,
    /// One JSON object per conversion
    Json,
}

/// Format a value with a fixed number of decimals
///
/// Rounds the exact binary value; exact ties resolve to even. Magnitudes of
/// `1e21` and above fall back to [`format_number`].
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return infinity_literal(value).to_string();
    }
    if value.abs() >= 1e21 {
        return format_number(value);
    }
    format!("{:.*}", decimals, value)
}

/// Format a value in its shortest round-trip form
///
/// Magnitudes outside `[1e-6, 1e21)` switch to exponent notation with an
/// explicit exponent sign, e.g. `1e+21` and `1.5e-7`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return infinity_literal(value).to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

fn infinity_literal(value: f64) -> &'static str {
    if value.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// Renders conversions and session views for the terminal
#[derive(Debug, Clone)]
pub struct ResultFormatter {
    format: OutputFormat,
    color: bool,
}

impl ResultFormatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render the outcome of converting `raw_input`
    pub fn render_outcome(
        &self,
        raw_input: &str,
        direction: crate::ConversionDirection,
        outcome: &crate::ConversionResult,
    ) -> String {
        match self.format {
            OutputFormat::Json => {
                JsonRecord::from_outcome(raw_input, direction, outcome).to_json_line()
            }
            OutputFormat::Text => match outcome {
                Ok(conversion) => self.render_conversion(conversion),
                Err(kind) => self.render_error(kind.user_message()),
            },
        }
    }

    /// Render a successful conversion as summary and formula lines
    pub fn render_conversion(&self, conversion: &Conversion) -> String {
        let display = conversion.display();
        let formula = conversion.formula();
        if self.color {
            format!("{}\n{}", style(display).bold(), style(formula).dim().italic())
        } else {
            format!("{}\n{}", display, formula)
        }
    }

    /// Render the session's current result slot
    pub fn render_view(&self, view: &ResultView) -> String {
        if self.format == OutputFormat::Json {
            return JsonRecord::from_view(view).to_json_line();
        }

        if let Some(error) = &view.error {
            return self.render_error(error);
        }

        match &view.formula {
            Some(formula) if view.value.is_some() => {
                if self.color {
                    format!(
                        "{}\n{}",
                        style(&view.display).bold(),
                        style(formula).dim().italic()
                    )
                } else {
                    format!("{}\n{}", view.display, formula)
                }
            }
            _ => {
                if self.color {
                    style(&view.display).dim().to_string()
                } else {
                    view.display.clone()
                }
            }
        }
    }

    fn render_error(&self, message: &str) -> String {
        if self.color {
            style(message).red().bold().to_string()
        } else {
            message.to_string()
        }
    }
}
