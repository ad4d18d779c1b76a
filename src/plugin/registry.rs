//! Format registration with the host
//!
//! The host asks the plugin to declare itself once, before any file is
//! opened. Declaration resolves the extension list, which stays cached for
//! the rest of the process.

use std::sync::Arc;

use log::info;

use crate::config::PluginConfig;
use crate::coregraphics::input::CoreGraphicsInput;
use crate::coregraphics::native::NativeImageSource;
use crate::extensions::{self, ExtensionSet};
use crate::plugin::image_input::{ImageInput, ImageOutput};

/// Creates a fresh reader
pub type InputFactory = Box<dyn Fn() -> Box<dyn ImageInput> + Send + Sync>;

/// Creates a fresh writer
pub type OutputFactory = Box<dyn Fn() -> Box<dyn ImageOutput> + Send + Sync>;

/// Everything the host needs to know about a format
pub struct FormatDeclaration {
    pub name: String,
    pub input_factory: InputFactory,
    pub extensions: Arc<ExtensionSet>,
    pub output_factory: Option<OutputFactory>,
    pub writer_capabilities: Option<Vec<String>>,
    pub library_name: String,
    pub priority: i32,
}

/// Host side of format registration
pub trait FormatRegistry {
    fn declare_format(&mut self, declaration: FormatDeclaration);
}

/// Declares the native-container reader to `registry`
///
/// # Arguments
/// * `registry` - Host registry receiving the declaration
/// * `source_factory` - Builds a native decoder for each new reader
/// * `config` - Name, dependency library and priority to declare
///
/// # Returns
/// The dependency library name
pub fn register_plugin<S, F>(registry: &mut dyn FormatRegistry, source_factory: F, config: &PluginConfig) -> String
where
    S: NativeImageSource + 'static,
    F: Fn() -> S + Send + Sync + 'static,
{
    let probe = source_factory();
    let extensions = extensions::input_extensions(|| probe.type_identifiers());

    let input_factory: InputFactory =
        Box::new(move || Box::new(CoreGraphicsInput::new(source_factory())) as Box<dyn ImageInput>);

    info!(
        "Declaring format '{}' ({} extensions, priority {})",
        config.format_name,
        extensions.len(),
        config.priority
    );

    registry.declare_format(FormatDeclaration {
        name: config.format_name.clone(),
        input_factory,
        extensions,
        output_factory: None,
        writer_capabilities: None,
        library_name: config.library_name.clone(),
        priority: config.priority,
    });

    config.library_name.clone()
}
