//! Headless converter session
//!
//! Holds the state a converter screen keeps between events: the text typed so
//! far, the selected direction and the single current-result slot. Rendering
//! is left to the caller.

pub mod debounce;

pub use debounce::Debouncer;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::conversion::{ConversionDirection, ConversionEngine, ConversionResult};

/// Text shown while no distance has been entered
pub const PLACEHOLDER_MESSAGE: &str = "Enter a distance and click Convert";

/// The session's current result slot
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub value: Option<f64>,
    pub error: Option<String>,
    /// Machine-readable code of the failure, see [`crate::error::ErrorKind::code`]
    pub error_code: Option<&'static str>,
    pub formula: Option<String>,
    pub display: String,
}

impl ResultView {
    /// View shown before any conversion
    pub fn placeholder() -> Self {
        Self {
            value: None,
            error: None,
            error_code: None,
            formula: None,
            display: PLACEHOLDER_MESSAGE.to_string(),
        }
    }

    /// View for a conversion outcome
    pub fn from_outcome(outcome: &ConversionResult) -> Self {
        match outcome {
            Ok(conversion) => Self {
                value: Some(conversion.output_value),
                error: None,
                error_code: None,
                formula: Some(conversion.formula()),
                display: conversion.display(),
            },
            Err(kind) => Self {
                value: None,
                error: Some(kind.user_message().to_string()),
                error_code: Some(kind.code()),
                formula: None,
                display: kind.user_message().to_string(),
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_none() && self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for ResultView {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// State of one converter screen
#[derive(Debug, Clone)]
pub struct ConverterSession {
    input: String,
    direction: ConversionDirection,
    view: ResultView,
    engine: ConversionEngine,
}

impl ConverterSession {
    /// Create a new session with empty input
    pub fn new(direction: ConversionDirection) -> Self {
        Self {
            input: String::new(),
            direction,
            view: ResultView::placeholder(),
            engine: ConversionEngine::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Replace the input text, returning whether it changed
    pub fn set_input(&mut self, input: impl Into<String>) -> bool {
        let input = input.into();
        if input == self.input {
            return false;
        }
        self.input = input;
        true
    }

    /// Select a direction, returning whether it changed
    pub fn set_direction(&mut self, direction: ConversionDirection) -> bool {
        if direction == self.direction {
            return false;
        }
        debug!(direction = direction.as_str(), "direction changed");
        self.direction = direction;
        true
    }

    /// Flip to the opposite direction
    pub fn swap_direction(&mut self) -> ConversionDirection {
        self.direction = self.direction.opposite();
        debug!(direction = self.direction.as_str(), "direction swapped");
        self.direction
    }

    /// Empty the input, returning whether it changed
    pub fn clear(&mut self) -> bool {
        self.set_input(String::new())
    }

    /// Convert the current input right away
    ///
    /// Empty input is converted like any other text and yields the error view.
    pub fn convert_now(&mut self) -> &ResultView {
        let outcome = self.engine.convert(&self.input, self.direction);
        self.view = ResultView::from_outcome(&outcome);
        &self.view
    }

    /// Recompute after a quiet period: placeholder for empty input, else convert
    pub fn refresh(&mut self) -> &ResultView {
        if self.input.is_empty() {
            self.view = ResultView::placeholder();
            &self.view
        } else {
            self.convert_now()
        }
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(ConversionDirection::default())
    }
}

/// Session shared between the event loop and debounced tasks
#[derive(Debug, Clone, Default)]
pub struct SharedSession(Arc<Mutex<ConverterSession>>);

impl SharedSession {
    pub fn new(session: ConverterSession) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    /// Lock the session; a poisoned lock still yields the last state
    pub fn lock(&self) -> MutexGuard<'_, ConverterSession> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Static help text listing both conversion formulas
pub fn reference_formulas() -> Vec<String> {
    ConversionDirection::ALL
        .iter()
        .map(|direction| {
            let label = match direction {
                ConversionDirection::KmToMiles => "Kilometers to Miles",
                ConversionDirection::MilesToKm => "Miles to Kilometers",
            };
            format!("{}: {}", label, direction.reference_formula())
        })
        .collect()
}
