pub mod coregraphics;
pub mod extensions;
pub mod plugin;
pub mod config;
pub mod backend;
pub mod utils;
pub mod commands;

pub use coregraphics::{CoreGraphicsInput, ImageIoError, ImageIoResult, ImageSpec, PixelFormat, SampleType};
pub use extensions::{ExtensionResolver, ExtensionSet};
pub use plugin::{register_plugin, FormatRegistry, ImageInput};
pub use backend::ImageCrateSource;
pub use config::PluginConfig;
