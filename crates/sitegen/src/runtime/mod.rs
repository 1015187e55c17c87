//! Shared runtime services for sitegen commands.

pub mod config;
pub mod console;
pub mod context;
pub mod env;
pub mod error;
pub mod input;
pub mod process;
