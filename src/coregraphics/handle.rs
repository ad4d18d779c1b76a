//! Ownership of native container references
//!
//! A `ContainerHandle` holds at most one container, one decoded page of that
//! container, and one raw pixel buffer copied out of that page. A buffer is
//! never held without its page, and a page never without its container.
//! Teardown releases buffer, then page, then container.

use log::{debug, trace};

use crate::coregraphics::errors::{ImageIoError, ImageIoResult};
use crate::coregraphics::native::{NativeContainer, NativePage};

/// Buffer type handed out by the pages of container `C`
pub type PageData<C> = <<C as NativeContainer>::Page as NativePage>::Data;

/// Exclusive owner of one native reference
///
/// Move-only: the wrapped reference cannot be cloned or aliased through this
/// type. Replacing or resetting releases the previous reference first, and
/// dropping the wrapper releases whatever it still holds.
pub struct OwnedRef<T> {
    value: Option<T>,
    kind: &'static str,
}

impl<T> OwnedRef<T> {
    /// Creates an empty owner for references of the given kind
    pub fn empty(kind: &'static str) -> Self {
        OwnedRef { value: None, kind }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Releases the held reference, if any
    pub fn reset(&mut self) {
        if let Some(value) = self.value.take() {
            trace!("Releasing native {}", self.kind);
            drop(value);
        }
    }

    /// Releases the held reference and takes ownership of `value`
    pub fn replace(&mut self, value: T) {
        self.reset();
        self.value = Some(value);
    }
}

impl<T> Drop for OwnedRef<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Native container, decoded page, and raw buffer owned together
pub struct ContainerHandle<C: NativeContainer> {
    data: OwnedRef<PageData<C>>,
    page: OwnedRef<C::Page>,
    container: OwnedRef<C>,
}

impl<C: NativeContainer> ContainerHandle<C> {
    /// Creates a handle that owns nothing
    pub fn new() -> Self {
        ContainerHandle {
            data: OwnedRef::empty("pixel buffer"),
            page: OwnedRef::empty("page"),
            container: OwnedRef::empty("container"),
        }
    }

    /// Takes ownership of a freshly probed container, releasing anything held before
    pub fn attach(&mut self, container: C) {
        self.release();
        self.container.replace(container);
    }

    pub fn is_open(&self) -> bool {
        self.container.is_set()
    }

    pub fn container(&self) -> Option<&C> {
        self.container.get()
    }

    pub fn page(&self) -> Option<&C::Page> {
        self.page.get()
    }

    pub fn has_pixel_data(&self) -> bool {
        self.data.is_set()
    }

    /// Installs a decoded page, dropping the buffer pulled from the previous one
    pub fn install_page(&mut self, page: C::Page) -> ImageIoResult<()> {
        if !self.container.is_set() {
            return Err(ImageIoError::NotOpen);
        }
        self.data.reset();
        self.page.replace(page);
        Ok(())
    }

    /// Releases the raw buffer and the decoded page, keeping the container
    pub fn invalidate_page(&mut self) {
        self.data.reset();
        self.page.reset();
    }

    /// Returns the raw pixel buffer of the current page, copying it out on first use
    pub fn pixel_data(&mut self) -> ImageIoResult<&[u8]> {
        if !self.data.is_set() {
            let page = self.page.get().ok_or(ImageIoError::NotOpen)?;
            let data = page.copy_data().ok_or(ImageIoError::PixelDataUnavailable)?;
            debug!("Pulled {} bytes of pixel data", data.as_ref().len());
            self.data.replace(data);
        }

        self.data
            .get()
            .map(|data| data.as_ref())
            .ok_or(ImageIoError::PixelDataUnavailable)
    }

    /// Releases buffer, page, and container in that order
    pub fn release(&mut self) {
        self.data.reset();
        self.page.reset();
        self.container.reset();
    }
}

impl<C: NativeContainer> Default for ContainerHandle<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: NativeContainer> Drop for ContainerHandle<C> {
    fn drop(&mut self) {
        self.release();
    }
}
