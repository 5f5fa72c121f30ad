//! levguard-cli: command-line front end for the levguard calculator.
//!
//! Loads calculator parameters from a TOML file, lets flags override them,
//! and renders results as a text report or JSON.

pub mod config;
pub mod error;
pub mod render;
