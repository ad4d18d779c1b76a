//! Extension listing command

use clap::ArgMatches;

use crate::backend::ImageCrateSource;
use crate::commands::command_traits::Command;
use crate::config::PluginConfig;
use crate::coregraphics::errors::ImageIoResult;
use crate::coregraphics::native::NativeImageSource;
use crate::extensions::ExtensionResolver;

/// Prints the extensions the reader registers for
pub struct ExtensionsCommand<'a> {
    config: &'a PluginConfig,
    verbose: bool,
}

impl<'a> ExtensionsCommand<'a> {
    pub fn new(args: &ArgMatches, config: &'a PluginConfig) -> ImageIoResult<Self> {
        Ok(ExtensionsCommand {
            config,
            verbose: args.get_flag("verbose"),
        })
    }
}

impl<'a> Command for ExtensionsCommand<'a> {
    fn execute(&self) -> ImageIoResult<()> {
        let mut resolver = ExtensionResolver::new();
        let extensions = resolver.resolve(ImageCrateSource::new().type_identifiers());

        println!(
            "Format '{}' (library {}, priority {}): {} extensions",
            self.config.format_name,
            self.config.library_name,
            self.config.priority,
            extensions.len()
        );
        println!("{}", extensions.iter().collect::<Vec<_>>().join(" "));

        if self.verbose && !resolver.unknown_identifiers().is_empty() {
            println!("Unknown type identifiers: {}", resolver.unknown_identifiers().join(", "));
        }

        Ok(())
    }
}
