//! # Dispatch control signal.
//!
//! [`Control`] is the one return value with dispatch-control meaning. Every
//! handler resolves to a `Control`; anything except [`Control::Stop`] lets the
//! emission proceed.
//!
//! The original sentinel convention ("a handler returning exactly `false`
//! stops propagation") is preserved through [`IntoControl`]: closures may
//! return `bool` (where `false` maps to `Stop`), `()` (always `Continue`),
//! or `Control` directly.
//!
//! ## Phase-specific meaning of `Stop`
//! - **before phase**: aborts the entire emission (normal/after never run);
//! - **normal phase**: skips remaining normal handlers and the after phase;
//! - **after phase**: skips the remaining after handlers only.
//!
//! ## Example
//! ```rust
//! use triphase::{Control, IntoControl};
//!
//! assert_eq!(false.into_control(), Control::Stop);
//! assert_eq!(true.into_control(), Control::Continue);
//! assert_eq!(().into_control(), Control::Continue);
//! ```

/// Signal returned by a handler to the dispatcher.
///
/// `Stop` halts further handler invocation within the current emission,
/// scoped by the phase the returning handler belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Control {
    /// Let the emission proceed to the next handler.
    #[default]
    Continue,
    /// Stop propagation (scope depends on the handler's phase).
    Stop,
}

impl Control {
    /// Returns `true` for [`Control::Stop`].
    pub fn is_stop(self) -> bool {
        matches!(self, Control::Stop)
    }

    /// Returns `true` for [`Control::Continue`].
    pub fn is_continue(self) -> bool {
        matches!(self, Control::Continue)
    }
}

/// Conversion of a handler closure's return value into a [`Control`].
///
/// Lets [`callback`](crate::callback) accept closures that return `()`
/// (fire-and-forget), `bool` (the original `false`-stops contract), or
/// `Control` (explicit).
pub trait IntoControl {
    /// Resolves the value to a dispatch signal.
    fn into_control(self) -> Control;
}

impl IntoControl for Control {
    fn into_control(self) -> Control {
        self
    }
}

impl IntoControl for bool {
    /// `false` stops propagation; `true` continues.
    fn into_control(self) -> Control {
        if self {
            Control::Continue
        } else {
            Control::Stop
        }
    }
}

impl IntoControl for () {
    /// A handler with nothing to say never stops propagation.
    fn into_control(self) -> Control {
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_maps_false_to_stop() {
        assert_eq!(false.into_control(), Control::Stop);
        assert_eq!(true.into_control(), Control::Continue);
    }

    #[test]
    fn test_unit_always_continues() {
        assert_eq!(().into_control(), Control::Continue);
    }

    #[test]
    fn test_control_is_identity() {
        assert_eq!(Control::Stop.into_control(), Control::Stop);
        assert!(Control::Stop.is_stop());
        assert!(Control::Continue.is_continue());
        assert_eq!(Control::default(), Control::Continue);
    }
}
