//! Windowed scanline reads
//!
//! The first read after a page change copies the page's whole raw buffer out
//! of the native decoder; every read slices rows out of that copy.

use crate::coregraphics::errors::{ImageIoError, ImageIoResult};
use crate::coregraphics::handle::ContainerHandle;
use crate::coregraphics::native::{NativeContainer, NativePage};
use crate::coregraphics::spec::PixelFormat;

/// Reads rows of the current page into caller buffers
pub struct ScanlineReader<'a, C: NativeContainer> {
    handle: &'a mut ContainerHandle<C>,
    format: PixelFormat,
}

impl<'a, C: NativeContainer> ScanlineReader<'a, C> {
    /// Create a reader over the page held by `handle`, laid out as `format`
    pub fn new(handle: &'a mut ContainerHandle<C>, format: PixelFormat) -> Self {
        ScanlineReader { handle, format }
    }

    pub fn row_stride(&self) -> usize {
        self.format.row_stride()
    }

    /// Copies rows `y_begin..y_end` into `out`
    ///
    /// # Arguments
    /// * `y_begin` - First row to copy
    /// * `y_end` - Row after the last one to copy
    /// * `out` - Destination, at least `(y_end - y_begin) * row_stride` bytes
    ///
    /// # Returns
    /// `StrideMismatch` if the decoder's row layout is packed differently
    /// than the pixel format implies, `OutOfRange` if the window runs past
    /// the decoded buffer
    pub fn read_rows(&mut self, y_begin: i32, y_end: i32, out: &mut [u8]) -> ImageIoResult<()> {
        if y_begin < 0 || y_end < y_begin {
            return Err(ImageIoError::InvalidArgument(format!(
                "invalid row range {}..{}",
                y_begin, y_end
            )));
        }

        let stride = self.format.row_stride();
        let reported = self.handle.page().ok_or(ImageIoError::NotOpen)?.bytes_per_row();
        let data = self.handle.pixel_data()?;

        if reported != stride {
            return Err(ImageIoError::StrideMismatch { expected: stride, reported });
        }

        let rows = (y_end - y_begin) as usize;
        let (start, length) = match ((y_begin as usize).checked_mul(stride), rows.checked_mul(stride)) {
            (Some(start), Some(length)) => (start, length),
            _ => {
                return Err(ImageIoError::OutOfRange {
                    start: usize::MAX,
                    length: usize::MAX,
                    available: data.len(),
                })
            }
        };

        if start > data.len() || length > data.len() - start {
            return Err(ImageIoError::OutOfRange { start, length, available: data.len() });
        }

        if out.len() < length {
            return Err(ImageIoError::InvalidArgument(format!(
                "destination holds {} bytes, {} rows need {}",
                out.len(),
                rows,
                length
            )));
        }

        out[..length].copy_from_slice(&data[start..start + length]);
        Ok(())
    }

    /// Copies row `y` into `out`
    pub fn read_row(&mut self, y: i32, out: &mut [u8]) -> ImageIoResult<()> {
        let y_end = y
            .checked_add(1)
            .ok_or_else(|| ImageIoError::InvalidArgument(format!("row {} out of range", y)))?;
        self.read_rows(y, y_end, out)
    }
}
