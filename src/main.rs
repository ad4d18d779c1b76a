use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use cgimageio::commands::{CgImageIoCommandFactory, CommandFactory};
use cgimageio::config::PluginConfig;
use cgimageio::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("cgimageio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read images through a native image container")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required_unless_present("extensions")
                .index(1),
        )
        .arg(
            Arg::new("subimage")
                .short('s')
                .long("subimage")
                .help("Only inspect this page")
                .value_name("INDEX")
                .required(false),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Read back every scanline of each inspected page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extensions")
                .long("extensions")
                .help("List the file extensions the reader registers for")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file (TOML)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match PluginConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => PluginConfig::builtin(),
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.log_level
    };

    if let Err(e) = Logger::init_global_logger(&config.log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CgImageIoCommandFactory::new();

    match factory.create_command(&matches, &config) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
