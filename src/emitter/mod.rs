//! # Emitter: public API surface and dispatch.
//!
//! ## Contents
//! - [`Emitter`] the synchronous phased emitter (registration, removal,
//!   dispatch, introspection)
//! - [`Emits`] capability trait for host types that embed an emitter
//!
//! ## Quick reference
//! ```text
//! registration   on / before / after / once       (try_* variants are loud)
//! removal        off / off_event / off_handler / clear
//! dispatch       emit(event, &args)
//! introspection  has_event / has_listeners / listeners /
//!                listener_count / event_names
//! ```
//!
//! See the [`Emitter`] docs for the dispatch algorithm and reentrancy rules.

mod core;
mod emits;

pub use emits::Emits;
pub use self::core::Emitter;
