//! Unit tests for the converter session and debouncer
//!
//! Tests cover:
//! - Result slot transitions (placeholder, error, converted)
//! - Direction changes recomputing the result
//! - Debounced scheduling of refreshes

use distconv::session::{SharedSession, PLACEHOLDER_MESSAGE};
use distconv::{ConversionDirection, ConverterSession, Debouncer, ResultView};
use std::time::Duration;

#[cfg(test)]
mod session_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_transitions() {
        let mut session = ConverterSession::new(ConversionDirection::KmToMiles);
        assert_eq!(session.view(), &ResultView::placeholder());

        session.set_input("abc");
        assert!(session.refresh().is_error());

        session.set_input("10");
        let view = session.refresh().clone();
        assert_eq!(view.value, Some(10.0 * 0.621371));
        assert_eq!(view.display, "10 km = 6.2137 miles");
        assert_eq!(view.error, None);

        session.clear();
        assert_eq!(session.refresh().display, PLACEHOLDER_MESSAGE);
    }

    #[test]
    fn test_direction_change_with_empty_input_keeps_placeholder() {
        let mut session = ConverterSession::default();
        session.set_direction(ConversionDirection::MilesToKm);

        assert!(session.refresh().is_placeholder());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_refresh_uses_latest_input() {
        let session = SharedSession::new(ConverterSession::default());
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        for text in ["4", "42", "42.195"] {
            session.lock().set_input(text);
            let shared = session.clone();
            debouncer.schedule(move || {
                shared.lock().refresh();
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        // Still inside the quiet period
        assert!(session.lock().view().is_placeholder());

        debouncer.flush().await;
        assert_eq!(
            session.lock().view().display,
            "42.195 km = 26.2187 miles"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_refresh_leaves_view_untouched() {
        let session = SharedSession::new(ConverterSession::default());
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        session.lock().set_input("8");
        let shared = session.clone();
        debouncer.schedule(move || {
            shared.lock().refresh();
        });
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(session.lock().view().is_placeholder());
    }
}
