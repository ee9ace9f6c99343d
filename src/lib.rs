//! # triphase
//!
//! **Triphase** is a minimal synchronous publish/subscribe primitive for Rust.
//!
//! An [`Emitter`] maps string event names to ordered handler lists and
//! dispatches emissions across three priority phases — **before**, **normal**,
//! **after** — with stop-propagation semantics. Everything happens in one
//! blocking pass on the calling thread; there is no scheduling, no delivery
//! guarantee machinery, and no cross-thread fan-out.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   caller                         Emitter
//!     │  on / before / after / once  │
//!     ├─────────────────────────────►│      Registry (IndexMap)
//!     │                              │        event ──► Slot
//!     │  off / off_event /           │                   ├─ One(Entry)   single handler
//!     │  off_handler / clear         │                   └─ Many(Vec)    ≥ 2, reg. order
//!     ├─────────────────────────────►│
//!     │                              │      Entry { callback, phase, once }
//!     │  emit(event, &args)          │
//!     └─────────────────────────────►│
//!                                    ▼
//!                       snapshot entries, then:
//!                       ┌─────────────────────────────────────────┐
//!                       │ before phase   Stop ► abort emission    │
//!                       │ normal phase   Stop ► skip rest + after │
//!                       │ after phase    Stop ► skip remaining    │
//!                       └─────────────────────────────────────────┘
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! emit(event, args)
//!   ├─► no handlers ─────────────► return (silent no-op)
//!   ├─► one bare normal handler ─► invoke directly, return (fast path)
//!   ├─► before handlers, registration order
//!   │     └─ Stop ► return (normal/after never run)
//!   ├─► normal handlers, registration order
//!   │     ├─ once entries deregister just before they run
//!   │     └─ Stop ► return (after phase skipped)
//!   └─► after handlers, registration order
//!         └─ Stop ► skip the remaining after handlers only
//! ```
//!
//! ## Features
//! | Area              | Description                                                      | Key types / traits            |
//! |-------------------|------------------------------------------------------------------|-------------------------------|
//! | **Registration**  | Phase-tagged handlers, idempotent `on`, one-shot `once`.         | [`Emitter`], [`callback`]     |
//! | **Stop control**  | Explicit propagation signal (`false` still means stop).          | [`Control`], [`IntoControl`]  |
//! | **Removal**       | Identity-keyed removal, per event / per handler / everything.    | [`Callback`]                  |
//! | **Capability**    | Grant emitter methods to a host type by delegation.              | [`Emits`]                     |
//! | **Configuration** | Capacity hint and per-event handler cap (0 = unlimited).         | [`EmitterConfig`]             |
//! | **Errors**        | Loud `try_*` registration when a handler cap is hit.             | [`EmitterError`]              |
//!
//! ## Optional features
//! - `logging`: exports simple stdout probes (`LogTap`) _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use triphase::{callback, Emitter};
//!
//! let emitter: Emitter<String> = Emitter::new();
//! let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
//!
//! // Normal handler: records the payload.
//! let record = {
//!     let log = Rc::clone(&log);
//!     callback(move |msg: &String| log.borrow_mut().push(msg.clone()))
//! };
//!
//! // Before handler: returning false stops the emission outright.
//! let gate = callback(|msg: &String| !msg.is_empty());
//!
//! emitter.before("say", &gate).on("say", &record);
//! emitter
//!     .emit("say", &"hello".to_string())
//!     .emit("say", &String::new()) // gated off
//!     .emit("say", &"world".to_string());
//!
//! assert_eq!(*log.borrow(), vec!["hello", "world"]);
//!
//! // Identity-keyed removal: the registered Rc is the key.
//! emitter.off("say", &record);
//! assert_eq!(emitter.listener_count("say"), 1); // the gate remains
//! ```
mod config;
mod emitter;
mod error;
mod handlers;
mod registry;

// ---- Public re-exports ----

pub use config::EmitterConfig;
pub use emitter::{Emits, Emitter};
pub use error::EmitterError;
pub use handlers::{callback, Callback, Control, IntoControl};

// Optional: expose simple stdout logging probes (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod observers;
#[cfg(feature = "logging")]
pub use observers::LogTap;
