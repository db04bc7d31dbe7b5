//! Command line interface for Yari.

pub mod args;
pub mod commands;
pub mod output;
