//! Distance Converter
//!
//! A Rust CLI tool and library for converting distances between kilometers
//! and miles, with a headless session model that debounces recomputation.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod parser;
pub mod session;

// Re-export commonly used types
pub use conversion::{
    convert, Conversion, ConversionDirection, ConversionRequest, ConversionResult,
    ConverterConfig, KM_TO_MILES, MILES_TO_KM,
};
pub use error::{ConverterError, ErrorKind};
pub use formatter::{format_fixed, format_number, OutputFormat};
pub use session::{ConverterSession, Debouncer, ResultView};

/// Convert raw text and render the summary line, or the user-facing error message
pub fn convert_to_display(raw_input: &str, direction: ConversionDirection) -> String {
    match convert(raw_input, direction) {
        Ok(conversion) => conversion.display(),
        Err(kind) => kind.user_message().to_string(),
    }
}
