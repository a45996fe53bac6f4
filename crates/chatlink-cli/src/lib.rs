//! chatlink CLI library entry.
//!
//! Wires the core codec to a command surface (decode/encode/scan) and a strict
//! YAML config. Kept separate from `main.rs` so integration tests can drive it.

pub mod commands;
pub mod config;
