//! # Handler callbacks.
//!
//! A [`Callback`] is a reference-counted closure invoked with the emission
//! payload. The `Rc` is doing double duty:
//!
//! - **Invocation**: the dispatcher clones entries cheaply when it snapshots
//!   a handler list, so no borrow is held across a handler call.
//! - **Identity**: removal is keyed by *reference identity* (`Rc::ptr_eq`),
//!   never structural equality. Keep a clone of the `Rc` you registered if
//!   you intend to remove that handler later.
//!
//! ## Example
//! ```rust
//! use triphase::{callback, Callback, Emitter};
//!
//! let emitter: Emitter<u32> = Emitter::new();
//! let gate: Callback<u32> = callback(|n: &u32| *n < 100); // false stops
//!
//! emitter.before("tick", &gate);
//! emitter.off("tick", &gate); // same Rc, removable by identity
//! assert!(!emitter.has_event("tick"));
//! ```

use std::rc::Rc;

use crate::handlers::control::{Control, IntoControl};

/// A registered handler: any invocable accepting the payload by reference
/// and resolving to a [`Control`].
///
/// Clones of one `Rc` are the *same* handler for registration and removal
/// purposes; two separately built callbacks are never equal, even when they
/// wrap identical code.
pub type Callback<A = ()> = Rc<dyn Fn(&A) -> Control>;

/// Builds a [`Callback`] from a closure.
///
/// The closure may return `()`, `bool`, or [`Control`]; see
/// [`IntoControl`]. Returning `false` (or [`Control::Stop`]) stops
/// propagation.
///
/// # Example
/// ```rust
/// use triphase::{callback, Control};
///
/// let quiet = callback(|_: &()| ());                  // never stops
/// let bounded = callback(|n: &i32| *n >= 0);          // stops on negatives
/// let explicit = callback(|_: &i32| Control::Stop);   // always stops
/// assert_eq!(bounded(&-1), Control::Stop);
/// # let _ = (quiet, explicit);
/// ```
pub fn callback<A, F, R>(f: F) -> Callback<A>
where
    A: 'static,
    F: Fn(&A) -> R + 'static,
    R: IntoControl,
{
    Rc::new(move |args: &A| f(args).into_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_adapts_return_types() {
        let unit = callback(|_: &i32| ());
        let boolean = callback(|n: &i32| *n > 0);
        let explicit = callback(|_: &i32| Control::Stop);

        assert_eq!(unit(&1), Control::Continue);
        assert_eq!(boolean(&1), Control::Continue);
        assert_eq!(boolean(&-1), Control::Stop);
        assert_eq!(explicit(&1), Control::Stop);
    }

    #[test]
    fn test_clones_share_identity() {
        let a = callback(|_: &()| ());
        let b = Rc::clone(&a);
        let c = callback(|_: &()| ());

        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
    }
}
