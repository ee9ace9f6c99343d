//! # Built-in observation helpers.
//!
//! Optional handlers that watch emissions without participating in the
//! application's own logic. Currently one member, behind the `logging`
//! feature:
//!
//! - [`LogTap`] stdout probes in `[label] k=v` format (demo/reference only)

mod log;

pub use log::LogTap;
