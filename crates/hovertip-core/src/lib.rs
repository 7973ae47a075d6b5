#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and hover debouncing.
//!
//! # Role in hovertip
//! `hovertip-core` is the input layer. It owns the coordinate types the
//! placement logic reasons about, the pointer events a host feeds in, and the
//! clock-injected debounce that keeps rapid pointer over/out sequences from
//! ever mounting an overlay.
//!
//! # How it fits in the system
//! `hovertip-widgets` consumes these types to measure overflow and resolve a
//! placement. Nothing here reads a real clock or a real terminal: time arrives
//! as `Instant` arguments and geometry arrives as plain values, so every state
//! transition is reproducible in tests.

pub mod debounce;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, warn};
