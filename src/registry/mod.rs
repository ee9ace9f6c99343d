//! # Handler registry: storage layout and mutation.
//!
//! Crate-internal. The registry's layout is dictated by the dispatch
//! algorithm in [`emitter`](crate::emitter):
//!
//! ```text
//! Registry
//!   └── IndexMap<String, Slot>          event name → handler list
//!                         │
//!                         ├── One(Entry)        single handler, unwrapped
//!                         └── Many(Vec<Entry>)  ≥ 2 handlers, registration order
//!                                      │
//!                                      └── Entry { callback, phase, once }
//! ```
//!
//! ## Contents
//! - [`Registry`] the ordered event map plus insert/remove rules
//! - `Slot` dual storage shape (`One` / `Many`), collapse on removal
//! - [`Entry`], [`Phase`] what is stored per registration
//!
//! The "no handlers" state is absence of the key; callers observe storage
//! shape only through list-returning introspection, which always presents a
//! vector.

mod core;
mod entry;
mod slot;

pub(crate) use self::core::Registry;
pub(crate) use entry::{Entry, Phase};
