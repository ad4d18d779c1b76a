//! Utility modules for the command-line tool

pub mod logger;
pub mod progress;
