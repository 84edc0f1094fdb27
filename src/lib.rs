//! Library exports for reusing graphic-editor subsystems.
//!
//! Exposes the editor state machine, drawing primitives, toolbar and
//! configuration so that tests and external tools (e.g. the schema dumper)
//! can share them with the main binary. The Wayland backend lives in the
//! binary only.

pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
