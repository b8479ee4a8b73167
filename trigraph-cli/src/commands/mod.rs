//! Command implementations for the trigraph CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod demo;
pub mod edit;
pub mod export;
pub mod interactive;
pub mod neighbors;
pub mod search;
pub mod stats;
