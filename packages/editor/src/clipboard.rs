//! # Clipboard
//!
//! Export delivery through a primary clipboard sink with one fallback.
//! A failure is only surfaced to the user when both sinks fail.

use crate::notification::{Notification, COPY_FAILURE, COPY_SUCCESS};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Anything that can receive copied text
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Try `primary`, then `fallback`; report the outcome as a notification
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
) -> Notification {
    let outcome = primary.write_text(text).or_else(|err| {
        warn!(error = %err, "Primary clipboard failed, trying fallback");
        fallback.write_text(text)
    });
    if outcome.is_ok() {
        debug!(bytes = text.len(), "Copied export");
    }
    notification_for(&outcome)
}

/// Notification for the final result of a copy, after any fallback ran
pub fn notification_for(outcome: &Result<(), ClipboardError>) -> Notification {
    match outcome {
        Ok(()) => Notification::success(COPY_SUCCESS),
        Err(err) => {
            warn!(error = %err, "Fallback clipboard failed");
            Notification::error(COPY_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        written: Vec<String>,
    }

    impl ClipboardSink for Recorder {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError("denied".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    fn failing() -> Recorder {
        Recorder { fail: true, ..Recorder::default() }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let mut primary = Recorder::default();
        let mut fallback = Recorder::default();

        let note = copy_with_fallback("<html>", &mut primary, &mut fallback);
        assert_eq!(note.message, "Template copied to clipboard!");
        assert_eq!(primary.written, vec!["<html>"]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_fallback_success_is_silent() {
        let mut primary = failing();
        let mut fallback = Recorder::default();

        let note = copy_with_fallback("<html>", &mut primary, &mut fallback);
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(fallback.written, vec!["<html>"]);
    }

    #[test]
    fn test_both_fail_reports_error() {
        let note = copy_with_fallback("<html>", &mut failing(), &mut failing());
        assert!(note.is_error());
        assert_eq!(note.message, "Failed to copy template. Please try again.");
        assert_eq!(note.visible_ms, 3000);
        assert_eq!(note.transition_ms, 300);
    }

    #[test]
    fn test_notification_for_outcome() {
        assert!(!notification_for(&Ok(())).is_error());
        assert!(notification_for(&Err(ClipboardError("rejected".to_string()))).is_error());
    }
}
