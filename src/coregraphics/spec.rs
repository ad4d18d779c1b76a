//! Pixel format inference and the host image spec
//!
//! `PixelFormat` is derived from a decoded page every time the active page
//! changes. `ImageSpec` is the value handed back to the host.

use std::collections::BTreeMap;
use std::fmt;

use log::warn;

use crate::coregraphics::errors::{ImageIoError, ImageIoResult};
use crate::coregraphics::native::{AlphaInfo, NativePage};

/// Storage type of a single channel sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    UInt8,
    UInt16,
    Half,
    UInt32,
    Float,
}

impl SampleType {
    /// Maps a bit depth and float flag onto a sample type
    pub fn from_depth(bits_per_component: u32, float_components: bool) -> ImageIoResult<Self> {
        match (bits_per_component, float_components) {
            (8, _) => Ok(SampleType::UInt8),
            (16, true) => Ok(SampleType::Half),
            (16, false) => Ok(SampleType::UInt16),
            (32, true) => Ok(SampleType::Float),
            (32, false) => Ok(SampleType::UInt32),
            (bits, _) => Err(ImageIoError::UnsupportedSampleDepth(bits)),
        }
    }

    /// Size of one sample in bytes
    pub fn size(self) -> usize {
        match self {
            SampleType::UInt8 => 1,
            SampleType::UInt16 | SampleType::Half => 2,
            SampleType::UInt32 | SampleType::Float => 4,
        }
    }

    /// Bytes in one row of `width` pixels with `channels` samples each
    pub fn row_bytes(self, width: u32, channels: u32) -> usize {
        width as usize * channels as usize * self.size()
    }

    pub fn name(self) -> &'static str {
        match self {
            SampleType::UInt8 => "uint8",
            SampleType::UInt16 => "uint16",
            SampleType::Half => "half",
            SampleType::UInt32 => "uint32",
            SampleType::Float => "float",
        }
    }
}

/// Where the alpha channel sits within a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaPosition {
    None,
    First,
    Last,
}

/// Channel count and alpha placement for one alpha arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    pub channels: u32,
    pub alpha: AlphaPosition,
}

impl ChannelLayout {
    const fn new(channels: u32, alpha: AlphaPosition) -> Self {
        ChannelLayout { channels, alpha }
    }

    /// Maps a native alpha arrangement onto a channel layout.
    /// Padding slots keep four channels but are never exposed as alpha.
    pub const fn for_alpha(alpha: AlphaInfo) -> Self {
        match alpha {
            AlphaInfo::None => Self::new(3, AlphaPosition::None),
            AlphaInfo::NoneSkipLast | AlphaInfo::NoneSkipFirst => Self::new(4, AlphaPosition::None),
            AlphaInfo::Last | AlphaInfo::PremultipliedLast => Self::new(4, AlphaPosition::Last),
            AlphaInfo::First | AlphaInfo::PremultipliedFirst => Self::new(4, AlphaPosition::First),
            AlphaInfo::Only => Self::new(1, AlphaPosition::First),
        }
    }
}

/// Inferred layout of a decoded page's raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub sample: SampleType,
    pub channels: u32,
    pub alpha: AlphaPosition,
    pub width: u32,
    pub height: u32,
}

impl PixelFormat {
    /// Derives the pixel format of a decoded page
    ///
    /// # Arguments
    /// * `page` - The decoded native page
    ///
    /// # Returns
    /// The inferred format, or `UnsupportedSampleDepth` for a bit depth
    /// outside {8, 16, 32}
    pub fn derive<P: NativePage>(page: &P) -> ImageIoResult<Self> {
        let info = page.bitmap_info();
        let sample = SampleType::from_depth(page.bits_per_component(), info.is_float())?;

        let layout = match info.alpha_info() {
            Some(alpha) => ChannelLayout::for_alpha(alpha),
            None => {
                warn!("Unknown alpha arrangement in bitmap info {:#x}, assuming four channels", info.raw());
                ChannelLayout::new(4, AlphaPosition::None)
            }
        };

        Ok(PixelFormat {
            sample,
            channels: layout.channels,
            alpha: layout.alpha,
            width: page.width(),
            height: page.height(),
        })
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.sample.row_bytes(1, self.channels)
    }

    /// Bytes per row implied by width, channel count and sample size
    pub fn row_stride(&self) -> usize {
        self.sample.row_bytes(self.width, self.channels)
    }

    /// Alpha index in the host's convention: 0 when alpha comes first,
    /// the channel count when it comes last
    pub fn alpha_index(&self) -> Option<u32> {
        match self.alpha {
            AlphaPosition::None => None,
            AlphaPosition::First => Some(0),
            AlphaPosition::Last => Some(self.channels),
        }
    }

    /// Channel names matching the layout
    pub fn channel_names(&self) -> Vec<String> {
        let names: &[&str] = match (self.channels, self.alpha) {
            (1, AlphaPosition::None) => &["Y"],
            (1, _) => &["A"],
            (3, _) => &["R", "G", "B"],
            (4, AlphaPosition::First) => &["A", "R", "G", "B"],
            (4, _) => &["R", "G", "B", "A"],
            _ => &[],
        };
        let mut names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        for c in names.len()..self.channels as usize {
            names.push(format!("channel{}", c));
        }
        names
    }
}

/// Value of a free-form spec attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Image description returned to the host
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    pub format: SampleType,
    pub nchannels: u32,
    pub alpha_channel: Option<u32>,
    pub channel_names: Vec<String>,
    pub attributes: BTreeMap<String, AttrValue>,
    pub multi_frame: bool,
}

impl ImageSpec {
    /// Builds a spec with dimensions, sample type and channels from `format`
    pub fn from_pixel_format(format: &PixelFormat) -> Self {
        ImageSpec {
            width: format.width,
            height: format.height,
            format: format.sample,
            nchannels: format.channels,
            alpha_channel: format.alpha_index(),
            channel_names: format.channel_names(),
            attributes: BTreeMap::new(),
            multi_frame: false,
        }
    }

    pub fn attribute(&mut self, name: &str, value: AttrValue) {
        self.attributes.insert(name.to_string(), value);
    }

    pub fn get_int_attribute(&self, name: &str) -> Option<i64> {
        match self.attributes.get(name)? {
            AttrValue::Int(v) => Some(*v),
            AttrValue::Str(_) => None,
        }
    }

    /// Bytes in one native scanline
    pub fn scanline_bytes(&self) -> usize {
        self.format.row_bytes(self.width, self.nchannels)
    }
}

impl fmt::Display for ImageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Dimensions: {}x{}", self.width, self.height)?;
        writeln!(f, "  Format: {}", self.format.name())?;
        writeln!(f, "  Channels: {} ({})", self.nchannels, self.channel_names.join(","))?;
        match self.alpha_channel {
            Some(index) => writeln!(f, "  Alpha channel: {}", index)?,
            None => writeln!(f, "  Alpha channel: none")?,
        }
        if self.multi_frame {
            writeln!(f, "  Multi-frame: yes")?;
        }
        for (name, value) in &self.attributes {
            writeln!(f, "  {}: {}", name, value)?;
        }
        Ok(())
    }
}
