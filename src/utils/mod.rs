//! Utility modules for common functionality
//!
//! File logging and progress reporting shared by the commands.

pub mod logger;
pub mod progress;
