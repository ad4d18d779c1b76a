//! Host plugin surface
//!
//! Interfaces the host image-I/O framework drives, and the registration
//! call that declares this reader to it.

pub mod image_input;
pub mod registry;

pub use image_input::{ImageInput, ImageOutput};
pub use registry::{register_plugin, FormatDeclaration, FormatRegistry, InputFactory, OutputFactory};
