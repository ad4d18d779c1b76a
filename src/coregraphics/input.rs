//! Host-facing image input backed by a native container

use std::path::Path;

use log::{debug, info};

use crate::coregraphics::constants::FORMAT_NAME;
use crate::coregraphics::errors::{ImageIoError, ImageIoResult};
use crate::coregraphics::native::{NativeContainer, NativeImageSource};
use crate::coregraphics::seeker::PageSeeker;
use crate::coregraphics::spec::ImageSpec;
use crate::plugin::ImageInput;

/// Image input that reads through the native decoder `S`
///
/// One instance reads one image at a time and must not be shared between
/// callers; decode several images in parallel with one instance each.
pub struct CoreGraphicsInput<S: NativeImageSource> {
    source: S,
    seeker: PageSeeker<S::Container>,
}

impl<S: NativeImageSource> CoreGraphicsInput<S> {
    pub fn new(source: S) -> Self {
        CoreGraphicsInput {
            source,
            seeker: PageSeeker::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn seeker(&self) -> &PageSeeker<S::Container> {
        &self.seeker
    }

    /// Switches to page `index` and returns its spec
    pub fn seek_page(&mut self, index: i32) -> ImageIoResult<ImageSpec> {
        self.seeker.seek(index).map(|spec| spec.clone())
    }

    /// Number of pages in the open container
    pub fn page_count(&self) -> ImageIoResult<usize> {
        self.seeker
            .handle()
            .container()
            .map(|container| container.page_count())
            .ok_or(ImageIoError::NotOpen)
    }
}

impl<S: NativeImageSource> ImageInput for CoreGraphicsInput<S> {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn valid_file(&mut self, path: &Path) -> bool {
        self.seeker.close();
        match self.source.probe_container(path) {
            Some(container) => {
                self.seeker.attach(container);
                true
            }
            None => {
                debug!("Native decoder does not recognize {}", path.display());
                false
            }
        }
    }

    fn open(&mut self, path: &Path) -> ImageIoResult<ImageSpec> {
        info!("Opening image container: {}", path.display());
        if !self.valid_file(path) {
            return Err(ImageIoError::InvalidContainer(path.display().to_string()));
        }

        let result = self.seek_page(0);
        if result.is_err() {
            self.seeker.close();
        }
        result
    }

    fn spec(&self) -> Option<&ImageSpec> {
        self.seeker.spec()
    }

    fn current_subimage(&self) -> i32 {
        self.seeker.current_page().map_or(-1, |page| page as i32)
    }

    fn seek_subimage(&mut self, subimage: i32, miplevel: i32) -> ImageIoResult<ImageSpec> {
        if miplevel != 0 {
            return Err(ImageIoError::InvalidArgument(format!("mip level {} not available", miplevel)));
        }
        self.seek_page(subimage)
    }

    fn read_native_scanline(&mut self, y: i32, out: &mut [u8]) -> ImageIoResult<()> {
        self.seeker.scanlines()?.read_row(y, out)
    }

    fn read_native_scanlines(&mut self, y_begin: i32, y_end: i32, out: &mut [u8]) -> ImageIoResult<()> {
        self.seeker.scanlines()?.read_rows(y_begin, y_end, out)
    }

    fn close(&mut self) -> ImageIoResult<()> {
        self.seeker.close();
        Ok(())
    }
}

impl<S: NativeImageSource> Drop for CoreGraphicsInput<S> {
    fn drop(&mut self) {
        self.seeker.close();
    }
}
