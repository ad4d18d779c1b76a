//! Native decoder collaborator
//!
//! The adapter never decodes pixels itself. It drives an OS-native image
//! container through these traits: probe a path, count and decode pages,
//! introspect a decoded page, and copy its raw pixel buffer out.

use std::collections::BTreeMap;
use std::path::Path;

use crate::coregraphics::constants::{alpha_info, bitmap_info};

/// How alpha is arranged within a pixel, as reported by the native decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaInfo {
    None,
    PremultipliedLast,
    PremultipliedFirst,
    Last,
    First,
    NoneSkipLast,
    NoneSkipFirst,
    Only,
}

impl AlphaInfo {
    /// Decodes a raw alpha arrangement code
    pub fn from_raw(code: u32) -> Option<Self> {
        match code {
            alpha_info::NONE => Some(AlphaInfo::None),
            alpha_info::PREMULTIPLIED_LAST => Some(AlphaInfo::PremultipliedLast),
            alpha_info::PREMULTIPLIED_FIRST => Some(AlphaInfo::PremultipliedFirst),
            alpha_info::LAST => Some(AlphaInfo::Last),
            alpha_info::FIRST => Some(AlphaInfo::First),
            alpha_info::NONE_SKIP_LAST => Some(AlphaInfo::NoneSkipLast),
            alpha_info::NONE_SKIP_FIRST => Some(AlphaInfo::NoneSkipFirst),
            alpha_info::ONLY => Some(AlphaInfo::Only),
            _ => None,
        }
    }

    /// Returns the raw code for this arrangement
    pub fn raw(self) -> u32 {
        match self {
            AlphaInfo::None => alpha_info::NONE,
            AlphaInfo::PremultipliedLast => alpha_info::PREMULTIPLIED_LAST,
            AlphaInfo::PremultipliedFirst => alpha_info::PREMULTIPLIED_FIRST,
            AlphaInfo::Last => alpha_info::LAST,
            AlphaInfo::First => alpha_info::FIRST,
            AlphaInfo::NoneSkipLast => alpha_info::NONE_SKIP_LAST,
            AlphaInfo::NoneSkipFirst => alpha_info::NONE_SKIP_FIRST,
            AlphaInfo::Only => alpha_info::ONLY,
        }
    }
}

/// Bitmap-info word: alpha arrangement in the low bits plus layout flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfo(u32);

impl BitmapInfo {
    pub fn from_raw(bits: u32) -> Self {
        BitmapInfo(bits)
    }

    pub fn new(alpha: AlphaInfo, float_components: bool) -> Self {
        let mut bits = alpha.raw();
        if float_components {
            bits |= bitmap_info::FLOAT_COMPONENTS;
        }
        BitmapInfo(bits)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// Alpha arrangement, or None for a code this adapter does not know
    pub fn alpha_info(self) -> Option<AlphaInfo> {
        AlphaInfo::from_raw(self.0 & bitmap_info::ALPHA_INFO_MASK)
    }

    pub fn is_float(self) -> bool {
        self.0 & bitmap_info::FLOAT_COMPONENTS != 0
    }
}

/// A value in the container-level property dictionary
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Int(i64),
    Float(f64),
    Str(String),
    Dict(ContainerProperties),
}

/// Container-level property dictionary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerProperties {
    values: BTreeMap<String, PropertyValue>,
}

impl ContainerProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: PropertyValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.values.get(key)
    }

    /// Reads an integer property. Floats are truncated; other kinds yield None.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            PropertyValue::Int(v) => Some(*v),
            PropertyValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One decoded page of a native container
pub trait NativePage {
    /// Owned copy of the raw pixel buffer
    type Data: AsRef<[u8]>;

    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Bits per color component
    fn bits_per_component(&self) -> u32;

    /// Alpha arrangement and component encoding flags
    fn bitmap_info(&self) -> BitmapInfo;

    /// Bytes per row as laid out by the decoder
    fn bytes_per_row(&self) -> usize;

    /// Copies the whole raw pixel buffer out of the page, or None on failure
    fn copy_data(&self) -> Option<Self::Data>;
}

/// An opened native container holding one or more pages
pub trait NativeContainer {
    type Page: NativePage;

    /// Number of pages in the container
    fn page_count(&self) -> usize;

    /// Decodes page `index`, or None on failure
    fn decode_page(&self, index: usize) -> Option<Self::Page>;

    /// Container-level property dictionary
    fn properties(&self) -> ContainerProperties;
}

/// Entry point to the native decoder
pub trait NativeImageSource {
    type Container: NativeContainer;

    /// Opens `path` as a container, or None if the decoder does not recognize it
    fn probe_container(&self, path: &Path) -> Option<Self::Container>;

    /// Ordered type identifiers of every format the decoder can read
    fn type_identifiers(&self) -> Vec<String>;
}
