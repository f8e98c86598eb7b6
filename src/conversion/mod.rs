//! Distance conversion module
//!
//! This module contains the conversion constants, direction type, core engine
//! and configuration.

pub mod config;
pub mod direction;
pub mod engine;

pub use config::ConverterConfig;
pub use direction::ConversionDirection;
pub use engine::{convert, Conversion, ConversionEngine, ConversionRequest};

use crate::error::ErrorKind;

/// Kilometers to miles conversion factor
pub const KM_TO_MILES: f64 = 0.621371;

/// Miles to kilometers conversion factor
pub const MILES_TO_KM: f64 = 1.60934;

/// Outcome of a single conversion
pub type ConversionResult = Result<Conversion, ErrorKind>;
