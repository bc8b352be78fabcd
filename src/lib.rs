//! folio
//!
//! An animated single-page portfolio rendered in the terminal.
//!
//! The crate follows a Pure Core / Impure Shell split:
//! - [`anim`] holds the time-driven engines (typed reveal, cycling tagline,
//!   count-up counters, loading splash). They never read a clock; callers
//!   pass `now`.
//! - [`state`] owns the engines, scroll position and measured page layout.
//! - [`view`] builds the page lines, draws frames and runs the event loop.

pub mod anim;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
