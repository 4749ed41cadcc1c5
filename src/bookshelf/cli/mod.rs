//! # CLI Layer
//!
//! One possible UI client for the library. This is the only place that
//! parses arguments, reads stdin, writes stdout and installs the log
//! subscriber.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup and per-subcommand handlers
//! - `menu.rs`: the interactive six-choice loop
//! - `render.rs`: turns `CmdResult` pieces into terminal text
//! - `logging.rs`: `tracing` subscriber setup

mod commands;
mod logging;
mod menu;
mod render;
mod setup;

pub use commands::run;
