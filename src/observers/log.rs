//! # Simple logging probes for debugging and demos.
//!
//! [`LogTap`] builds handlers that print emissions to stdout in a
//! human-readable format. Primarily useful for development, debugging, and
//! examples — not intended for production use; register your own callbacks
//! for structured logging or metrics collection.
//!
//! ## Output format
//! ```text
//! [tick] args=42
//! [enter:save] args=Document { dirty: true }
//! [leave:save] args=Document { dirty: false }
//! ```
//!
//! ## Example
//! ```rust
//! use triphase::{Emitter, LogTap};
//!
//! let emitter: Emitter<u32> = Emitter::new();
//! emitter.on("tick", &LogTap::probe("tick"));
//! emitter.emit("tick", &42); // prints "[tick] args=42"
//! ```

use std::fmt::Debug;

use crate::emitter::Emitter;
use crate::handlers::{callback, Callback};

/// Stdout logging probes.
///
/// Enabled via the `logging` feature. Probes never stop propagation.
pub struct LogTap;

impl LogTap {
    /// Builds a handler that prints the payload under `label`.
    pub fn probe<A: Debug + 'static>(label: &str) -> Callback<A> {
        let label = label.to_owned();
        callback(move |args: &A| println!("[{label}] args={args:?}"))
    }

    /// Registers an enter probe (before phase) and a leave probe (after
    /// phase) for `event`, bracketing the normal handlers in the output.
    ///
    /// Note the leave probe is subject to normal stop-propagation rules: it
    /// stays quiet for emissions whose normal phase was stopped.
    pub fn attach<A: Debug + 'static>(emitter: &Emitter<A>, event: &str) {
        emitter
            .before(event, &Self::probe(&format!("enter:{event}")))
            .after(event, &Self::probe(&format!("leave:{event}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Control;

    #[test]
    fn test_probe_never_stops_propagation() {
        let probe = LogTap::probe::<u32>("t");
        assert_eq!(probe(&7), Control::Continue);
    }

    #[test]
    fn test_attach_registers_both_phases() {
        let emitter: Emitter<u32> = Emitter::new();
        LogTap::attach(&emitter, "tick");
        assert_eq!(emitter.listener_count("tick"), 2);
    }
}
