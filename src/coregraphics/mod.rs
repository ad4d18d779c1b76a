//! Native image container adapter
//!
//! This module reads images through an opaque, OS-native image container:
//! it owns the container and its decoded pages, infers a pixel format from
//! what the container reports, and serves scanline reads from the page's
//! raw pixel buffer.

pub mod errors;
pub mod constants;
pub mod native;
pub mod handle;
pub mod spec;
pub mod seeker;
pub mod scanline;
pub mod input;
#[cfg(test)]
mod tests;

pub use errors::{ImageIoError, ImageIoResult};
pub use native::{AlphaInfo, BitmapInfo, ContainerProperties, NativeContainer, NativeImageSource, NativePage, PropertyValue};
pub use handle::{ContainerHandle, OwnedRef};
pub use spec::{AlphaPosition, AttrValue, ChannelLayout, ImageSpec, PixelFormat, SampleType};
pub use seeker::{PageSeeker, SeekerState};
pub use scanline::ScanlineReader;
pub use input::CoreGraphicsInput;
