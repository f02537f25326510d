//! parcelroute CLI library.
//!
//! Subcommand handlers, output formatting, and terminal styling for the
//! `parcelroute` binary. Handlers write through `impl Write` so they can be
//! exercised without spawning the binary.

pub mod commands;
pub mod output;
pub mod terminal;
