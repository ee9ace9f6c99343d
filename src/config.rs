//! # Emitter configuration.
//!
//! [`EmitterConfig`] centralizes the two knobs an emitter has. Both use `0`
//! as a sentinel:
//!
//! - `initial_events = 0` → no registry preallocation
//! - `max_handlers = 0` → unlimited handlers per event
//!
//! Prefer the [`EmitterConfig::handler_limit`] accessor over comparing
//! `max_handlers` against `0` at call sites.
//!
//! ## Example
//! ```rust
//! use triphase::{callback, Emitter, EmitterConfig};
//!
//! let cfg = EmitterConfig { initial_events: 8, max_handlers: 2 };
//! let emitter: Emitter<()> = Emitter::with_config(cfg);
//!
//! emitter.on("tick", &callback(|_: &()| ()));
//! emitter.on("tick", &callback(|_: &()| ()));
//! // Third registration exceeds the limit; loud via try_on, silent via on.
//! assert!(emitter.try_on("tick", &callback(|_: &()| ())).is_err());
//! assert_eq!(emitter.listener_count("tick"), 2);
//! ```

/// Configuration for an [`Emitter`](crate::Emitter).
///
/// ## Field semantics
/// - `initial_events`: capacity hint for the event map (`0` = none)
/// - `max_handlers`: per-event handler cap (`0` = unlimited)
#[derive(Clone, Copy, Debug, Default)]
pub struct EmitterConfig {
    /// Number of distinct event names to preallocate registry space for.
    ///
    /// Purely a capacity hint; the registry grows past it freely.
    pub initial_events: usize,

    /// Maximum number of handlers registered per event.
    ///
    /// - `0` = unlimited
    /// - `n > 0` = at most `n` entries per event, across all phases
    ///
    /// When the cap is reached, `try_*` registration returns
    /// [`EmitterError::HandlerLimit`](crate::EmitterError::HandlerLimit)
    /// and the chaining methods no-op silently. Idempotent re-registration
    /// of a bare normal handler never counts against the cap.
    pub max_handlers: usize,
}

impl EmitterConfig {
    /// Returns the per-event handler cap as an `Option`.
    ///
    /// `None` means unlimited (`max_handlers == 0`).
    pub fn handler_limit(&self) -> Option<usize> {
        if self.max_handlers == 0 {
            None
        } else {
            Some(self.max_handlers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_unlimited() {
        assert_eq!(EmitterConfig::default().handler_limit(), None);
    }

    #[test]
    fn test_positive_cap_is_passed_through() {
        let cfg = EmitterConfig {
            initial_events: 0,
            max_handlers: 4,
        };
        assert_eq!(cfg.handler_limit(), Some(4));
    }
}
