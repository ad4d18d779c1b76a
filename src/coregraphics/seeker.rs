//! Page cursor state machine
//!
//! Tracks which page of the open container is decoded and re-derives the
//! pixel format whenever that page changes.

use log::{debug, warn};

use crate::coregraphics::constants::{attributes, properties};
use crate::coregraphics::errors::{ImageIoError, ImageIoResult};
use crate::coregraphics::handle::ContainerHandle;
use crate::coregraphics::native::{ContainerProperties, NativeContainer};
use crate::coregraphics::scanline::ScanlineReader;
use crate::coregraphics::spec::{AttrValue, ImageSpec, PixelFormat};

/// Lifecycle of a `PageSeeker`
#[derive(Debug, Clone, PartialEq)]
pub enum SeekerState {
    /// No container
    Closed,
    /// Container attached, no page decoded yet
    Attached,
    /// Page `page` is decoded and described by `format` and `spec`
    Open {
        page: usize,
        format: PixelFormat,
        spec: ImageSpec,
    },
    /// A backward seek dropped the cached page and the re-decode failed.
    /// Only `close` leaves this state.
    Invalid,
}

/// Owns the container handle and the cursor over its pages
pub struct PageSeeker<C: NativeContainer> {
    handle: ContainerHandle<C>,
    state: SeekerState,
}

impl<C: NativeContainer> PageSeeker<C> {
    pub fn new() -> Self {
        PageSeeker {
            handle: ContainerHandle::new(),
            state: SeekerState::Closed,
        }
    }

    /// Takes ownership of a probed container with the cursor uninitialized
    pub fn attach(&mut self, container: C) {
        self.handle.attach(container);
        self.state = SeekerState::Attached;
    }

    pub fn state(&self) -> &SeekerState {
        &self.state
    }

    pub fn handle(&self) -> &ContainerHandle<C> {
        &self.handle
    }

    /// Index of the decoded page, or None while uninitialized
    pub fn current_page(&self) -> Option<usize> {
        match self.state {
            SeekerState::Open { page, .. } => Some(page),
            _ => None,
        }
    }

    pub fn spec(&self) -> Option<&ImageSpec> {
        match &self.state {
            SeekerState::Open { spec, .. } => Some(spec),
            _ => None,
        }
    }

    pub fn format(&self) -> Option<&PixelFormat> {
        match &self.state {
            SeekerState::Open { format, .. } => Some(format),
            _ => None,
        }
    }

    /// Makes page `index` the current page
    ///
    /// Seeking to the current page returns the cached spec without decoding.
    /// Seeking backward drops the cached page and buffer before re-decoding;
    /// if that re-decode fails the seeker becomes `Invalid`. Any other failure
    /// leaves the previous page and spec in place.
    ///
    /// # Arguments
    /// * `index` - Page to decode
    ///
    /// # Returns
    /// The spec of the requested page
    pub fn seek(&mut self, index: i32) -> ImageIoResult<&ImageSpec> {
        if index < 0 {
            return Err(ImageIoError::InvalidArgument(format!("negative page index {}", index)));
        }
        let index = index as usize;

        let current = match &self.state {
            SeekerState::Closed => return Err(ImageIoError::NotOpen),
            SeekerState::Invalid => return Err(ImageIoError::InvalidState),
            SeekerState::Attached => None,
            SeekerState::Open { page, .. } => Some(*page),
        };

        if current == Some(index) {
            return self.spec().ok_or(ImageIoError::InvalidState);
        }

        if current.map_or(false, |page| index < page) {
            debug!("Backward seek to page {}, dropping cached page and buffer", index);
            self.handle.invalidate_page();
            self.state = SeekerState::Invalid;
        }

        let container = self.handle.container().ok_or(ImageIoError::NotOpen)?;
        let page_count = container.page_count();
        if index >= page_count {
            return Err(ImageIoError::PageNotFound { page: index, page_count });
        }

        debug!("Decoding page {} of {}", index, page_count);
        let page = match container.decode_page(index) {
            Some(page) => page,
            None => {
                warn!("Native decoder failed on page {}", index);
                return Err(ImageIoError::DecodeFailed { page: index });
            }
        };

        // Channel data stays in the container's native color space.
        let format = PixelFormat::derive(&page)?;
        let spec = describe(&format, page_count, &container.properties());

        self.handle.install_page(page)?;
        self.state = SeekerState::Open { page: index, format, spec };

        self.spec().ok_or(ImageIoError::InvalidState)
    }

    /// Borrows a reader over the current page's scanlines
    pub fn scanlines(&mut self) -> ImageIoResult<ScanlineReader<'_, C>> {
        match &self.state {
            SeekerState::Open { format, .. } => Ok(ScanlineReader::new(&mut self.handle, *format)),
            SeekerState::Invalid => Err(ImageIoError::InvalidState),
            SeekerState::Closed | SeekerState::Attached => Err(ImageIoError::NotOpen),
        }
    }

    /// Releases buffer, page and container; safe to call repeatedly
    pub fn close(&mut self) {
        self.handle.release();
        self.state = SeekerState::Closed;
    }
}

impl<C: NativeContainer> Default for PageSeeker<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the host spec for a page, annotated with container-level facts
fn describe(format: &PixelFormat, page_count: usize, props: &ContainerProperties) -> ImageSpec {
    let mut spec = ImageSpec::from_pixel_format(format);

    if let Some(loop_count) = props.get_int(properties::LOOP_COUNT).filter(|&n| n > 0) {
        spec.attribute(attributes::LOOP_COUNT, AttrValue::Int(loop_count));
    }

    if page_count > 1 {
        spec.multi_frame = true;
        spec.attribute(attributes::MOVIE, AttrValue::Int(1));
    }

    spec
}
