//! Native decoder built on the `image` crate
//!
//! Stands in for the OS decoder where none is available. Every page is
//! normalized to interleaved RGB or RGBA at 8 bits, 16 bits, or 32-bit float,
//! with alpha last and not premultiplied.

use std::cell::OnceCell;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ColorType, DynamicImage, ImageFormat, ImageReader, RgbaImage};
use log::{debug, warn};

use crate::coregraphics::constants::properties;
use crate::coregraphics::native::{
    AlphaInfo, BitmapInfo, ContainerProperties, NativeContainer, NativeImageSource, NativePage, PropertyValue,
};

/// Type identifiers of the formats the `image` crate decodes
const SUPPORTED_TYPE_IDENTIFIERS: &[&str] = &[
    "public.png",
    "public.jpeg",
    "com.compuserve.gif",
    "com.microsoft.bmp",
    "com.microsoft.ico",
    "public.tiff",
    "public.radiance",
    "com.ilm.openexr-image",
    "com.truevision.tga-image",
    "public.pbm",
    "org.webmproject.webp",
];

/// Decoder entry point backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateSource;

impl ImageCrateSource {
    pub fn new() -> Self {
        ImageCrateSource
    }
}

impl NativeImageSource for ImageCrateSource {
    type Container = ImageCrateContainer;

    fn probe_container(&self, path: &Path) -> Option<ImageCrateContainer> {
        let reader = ImageReader::open(path).ok()?.with_guessed_format().ok()?;
        let format = reader.format()?;
        debug!("Probed {} as {:?}", path.display(), format);

        let (page_count, properties) = if format == ImageFormat::Gif {
            scan_gif(path)?
        } else {
            (1, ContainerProperties::new())
        };

        Some(ImageCrateContainer {
            path: path.to_path_buf(),
            format,
            page_count,
            properties,
            frames: OnceCell::new(),
        })
    }

    fn type_identifiers(&self) -> Vec<String> {
        SUPPORTED_TYPE_IDENTIFIERS.iter().map(|s| s.to_string()).collect()
    }
}

/// An image file the `image` crate recognized
#[derive(Debug, Clone)]
pub struct ImageCrateContainer {
    path: PathBuf,
    format: ImageFormat,
    page_count: usize,
    properties: ContainerProperties,
    /// Composited animation frames, decoded together on first use
    frames: OnceCell<Vec<RgbaImage>>,
}

impl ImageCrateContainer {
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Each frame depends on the ones before it, so all frames are
    /// composited in one pass and kept for later seeks.
    fn decode_gif_frame(&self, index: usize) -> Option<DynamicImage> {
        if self.frames.get().is_none() {
            let frames = self.composite_gif_frames()?;
            debug!("Composited {} frames of {}", frames.len(), self.path.display());
            let _ = self.frames.set(frames);
        }

        let frame = self.frames.get()?.get(index)?;
        Some(DynamicImage::ImageRgba8(frame.clone()))
    }

    fn composite_gif_frames(&self) -> Option<Vec<RgbaImage>> {
        let file = File::open(&self.path).ok()?;
        let decoder = GifDecoder::new(BufReader::new(file)).ok()?;
        match decoder.into_frames().collect_frames() {
            Ok(frames) => Some(frames.into_iter().map(|frame| frame.into_buffer()).collect()),
            Err(e) => {
                warn!("Failed to decode frames of {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn decode_still(&self) -> Option<DynamicImage> {
        let reader = ImageReader::open(&self.path).ok()?.with_guessed_format().ok()?;
        match reader.decode() {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Failed to decode {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl NativeContainer for ImageCrateContainer {
    type Page = ImageCratePage;

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn decode_page(&self, index: usize) -> Option<ImageCratePage> {
        if index >= self.page_count {
            return None;
        }

        let image = if self.format == ImageFormat::Gif {
            self.decode_gif_frame(index)?
        } else {
            self.decode_still()?
        };

        Some(ImageCratePage::new(image))
    }

    fn properties(&self) -> ContainerProperties {
        self.properties.clone()
    }
}

/// One decoded page, normalized to RGB or RGBA
#[derive(Debug, Clone)]
pub struct ImageCratePage {
    image: DynamicImage,
}

impl ImageCratePage {
    /// Normalizes `image` to one of the layouts the adapter understands
    pub fn new(image: DynamicImage) -> Self {
        let image = match image.color() {
            ColorType::L8 | ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
            ColorType::La8 | ColorType::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
            ColorType::L16 | ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
            ColorType::La16 | ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
            ColorType::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
            _ => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        };
        ImageCratePage { image }
    }

    fn channels(&self) -> usize {
        self.image.color().channel_count() as usize
    }
}

impl NativePage for ImageCratePage {
    type Data = Vec<u8>;

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn bits_per_component(&self) -> u32 {
        let color = self.image.color();
        (color.bytes_per_pixel() as u32 / color.channel_count() as u32) * 8
    }

    fn bitmap_info(&self) -> BitmapInfo {
        let alpha = if self.image.color().has_alpha() {
            AlphaInfo::Last
        } else {
            AlphaInfo::None
        };
        let float = matches!(self.image.color(), ColorType::Rgb32F | ColorType::Rgba32F);
        BitmapInfo::new(alpha, float)
    }

    fn bytes_per_row(&self) -> usize {
        self.image.width() as usize * self.channels() * (self.bits_per_component() as usize / 8)
    }

    fn copy_data(&self) -> Option<Vec<u8>> {
        Some(self.image.as_bytes().to_vec())
    }
}

/// Counts GIF frames from their headers and reads the loop count
///
/// Frame data is skipped, not decoded. A NETSCAPE loop count of 0 means
/// "forever" and is reported as 0.
fn scan_gif(path: &Path) -> Option<(usize, ContainerProperties)> {
    let file = File::open(path).ok()?;
    let mut options = gif::DecodeOptions::new();
    options.skip_frame_decoding(true);
    let mut decoder = options.read_info(BufReader::new(file)).ok()?;

    let mut count = 0;
    loop {
        match decoder.next_frame_info() {
            Ok(Some(_)) => count += 1,
            Ok(None) => break,
            Err(e) => {
                warn!("Stopped scanning {} after {} frames: {}", path.display(), count, e);
                break;
            }
        }
    }
    if count == 0 {
        return None;
    }

    let loop_count = match decoder.repeat() {
        gif::Repeat::Finite(n) => i64::from(n),
        gif::Repeat::Infinite => 0,
    };
    let mut props = ContainerProperties::new();
    props.insert(properties::LOOP_COUNT, PropertyValue::Int(loop_count));

    Some((count, props))
}
