//! Seilens command-line interface.
//!
//! The `seilens` binary is the operator entry point: it loads the TOML
//! configuration once, builds the shared analysis pipeline, and either runs
//! one-shot analyses or starts one of the two transport servers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
