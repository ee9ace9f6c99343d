//! # Handler types: callbacks and the dispatch control signal.
//!
//! This module groups the caller-facing handler vocabulary:
//! - [`Callback`] reference-counted handler closures, removable by identity
//! - [`callback`] the constructor adapting `()` / `bool` / `Control` returns
//! - [`Control`], [`IntoControl`] the stop-propagation signal
//!
//! Phase tagging (before/normal/after) is *not* part of the callback itself;
//! it is chosen at registration time (`on` / `before` / `after` / `once`)
//! and stored by the registry. One callback may therefore be registered in
//! several phases at once, and each registration is removed independently.

mod callback;
mod control;

pub use callback::{callback, Callback};
pub use control::{Control, IntoControl};
