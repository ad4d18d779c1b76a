//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod extensions_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use extensions_command::ExtensionsCommand;

use clap::ArgMatches;
use crate::config::PluginConfig;
use crate::coregraphics::errors::ImageIoResult;

/// Factory for creating command instances based on CLI arguments
pub struct CgImageIoCommandFactory;

impl CgImageIoCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CgImageIoCommandFactory
    }
}

impl Default for CgImageIoCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CgImageIoCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a PluginConfig) -> ImageIoResult<Box<dyn Command + 'a>> {
        if args.get_flag("extensions") {
            Ok(Box::new(ExtensionsCommand::new(args, config)?))
        } else {
            // Default to inspecting the input file
            Ok(Box::new(InspectCommand::new(args)?))
        }
    }
}
