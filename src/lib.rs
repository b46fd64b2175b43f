//! Library crate root for translation progress tracking and `.mdc` maintenance.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod mdc;
pub mod progress;
