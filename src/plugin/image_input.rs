//! Reader and writer interfaces the host drives

use std::path::Path;

use crate::coregraphics::errors::ImageIoResult;
use crate::coregraphics::spec::ImageSpec;

/// A format reader the host opens files with
pub trait ImageInput {
    /// Name the format is registered under
    fn format_name(&self) -> &'static str;

    /// Probes `path`; on success the probed container stays open
    fn valid_file(&mut self, path: &Path) -> bool;

    /// Opens `path` and positions on the first subimage
    fn open(&mut self, path: &Path) -> ImageIoResult<ImageSpec>;

    /// Spec of the current subimage, if one is open
    fn spec(&self) -> Option<&ImageSpec>;

    /// Index of the current subimage, or -1 when none is decoded
    fn current_subimage(&self) -> i32;

    /// Switches to `subimage` at `miplevel`
    fn seek_subimage(&mut self, subimage: i32, miplevel: i32) -> ImageIoResult<ImageSpec>;

    /// Copies scanline `y` of the current subimage in native layout
    fn read_native_scanline(&mut self, y: i32, out: &mut [u8]) -> ImageIoResult<()>;

    /// Copies scanlines `y_begin..y_end` of the current subimage in native layout
    fn read_native_scanlines(&mut self, y_begin: i32, y_end: i32, out: &mut [u8]) -> ImageIoResult<()>;

    /// Releases everything held; safe to call repeatedly
    fn close(&mut self) -> ImageIoResult<()>;
}

/// A format writer the host saves files with
pub trait ImageOutput {
    fn format_name(&self) -> &'static str;
}
