//! Error types for the emitter.
//!
//! The emitter is deliberately fail-silent for everything inside its normal
//! contract: emitting an event nobody subscribed to, removing a handler that
//! was never registered, or re-registering a bare normal handler are all
//! quiet no-ops. [`EmitterError`] covers the one situation the crate treats
//! as a programmer error worth surfacing — and only through the `try_*`
//! registration methods; the chaining API stays silent.

use thiserror::Error;

/// # Errors produced by emitter registration.
///
/// Only reachable through [`Emitter::try_on`](crate::Emitter::try_on) and
/// friends; the chaining registration methods swallow the same condition.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitterError {
    /// The per-event handler limit configured via
    /// [`EmitterConfig::max_handlers`](crate::EmitterConfig::max_handlers)
    /// was reached by a non-duplicate registration.
    #[error("handler limit {limit} reached for event {event:?}")]
    HandlerLimit {
        /// The event that is full.
        event: String,
        /// The configured per-event limit.
        limit: usize,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use triphase::EmitterError;
    ///
    /// let err = EmitterError::HandlerLimit { event: "tick".into(), limit: 8 };
    /// assert_eq!(err.as_label(), "handler_limit");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::HandlerLimit { .. } => "handler_limit",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::HandlerLimit { event, limit } => {
                format!("event {event:?} already holds {limit} handlers")
            }
        }
    }
}
