//! Command helpers for the `matrixtool` binary.
pub mod commands;
