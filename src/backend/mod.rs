//! Native decoder implementations
//!
//! The adapter talks to the decoder through the traits in
//! `coregraphics::native`. This module provides one that works anywhere the
//! `image` crate does.

mod image_source;

pub use image_source::{ImageCrateContainer, ImageCratePage, ImageCrateSource};
