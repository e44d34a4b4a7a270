//! Command-line front end for building and inspecting game trees
//!
//! The commands only consume the public tree and position API; they parse
//! arguments, drive tree construction and pick an output format.

pub mod commands;
pub mod config;
pub mod output;
