//! Integration tests reading real image files through the `image` crate backend

extern crate std;

use std::fs;
use std::path::PathBuf;

use byteorder::{ByteOrder, NativeEndian};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Frame, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};
use log::LevelFilter;

use cgimageio::utils::logger::Logger;
use cgimageio::{CoreGraphicsInput, ImageCrateSource, ImageInput, ImageIoError, SampleType};

/// Temporary file removed when dropped
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> Self {
        TempFile(std::env::temp_dir().join(format!("cgimageio-{}-{}", std::process::id(), name)))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn reader() -> CoreGraphicsInput<ImageCrateSource> {
    CoreGraphicsInput::new(ImageCrateSource::new())
}

/// Writes one solid 3x3 frame per color
fn write_gif(file: &TempFile, colors: &[[u8; 4]], repeat: Option<Repeat>) {
    let out = fs::File::create(&file.0).unwrap();
    let mut encoder = GifEncoder::new(out);
    if let Some(repeat) = repeat {
        encoder.set_repeat(repeat).unwrap();
    }
    let frames = colors
        .iter()
        .map(|&color| Frame::new(RgbaImage::from_pixel(3, 3, Rgba(color))));
    encoder.encode_frames(frames).unwrap();
}

#[test]
fn test_rgb_png_workflow() {
    let file = TempFile::new("rgb.png");
    let image = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 80, 7]));
    image.save(&file.0).unwrap();

    let mut input = reader();
    let spec = input.open(&file.0).unwrap();
    std::assert_eq!((spec.width, spec.height), (5, 3));
    std::assert_eq!(spec.nchannels, 3);
    std::assert_eq!(spec.alpha_channel, None);
    std::assert_eq!(spec.format, SampleType::UInt8);
    std::assert!(!spec.multi_frame);
    std::assert_eq!(input.page_count().unwrap(), 1);

    let mut all = vec![0u8; spec.scanline_bytes() * 3];
    input.read_native_scanlines(0, 3, &mut all).unwrap();
    std::assert_eq!(all, image.into_raw());

    let mut row = vec![0u8; spec.scanline_bytes()];
    input.read_native_scanline(2, &mut row).unwrap();
    std::assert_eq!(row, all[30..45].to_vec());

    std::assert!(matches!(
        input.seek_subimage(1, 0),
        Err(ImageIoError::PageNotFound { page: 1, page_count: 1 })
    ));
    input.close().unwrap();
}

#[test]
fn test_sixteen_bit_rgba_png() {
    let file = TempFile::new("rgba16.png");
    let image: ImageBuffer<Rgba<u16>, Vec<u16>> =
        ImageBuffer::from_fn(4, 2, |x, y| Rgba([x as u16 * 1000, y as u16 * 3000, 65535, 512]));
    image.save(&file.0).unwrap();

    let mut input = reader();
    let spec = input.open(&file.0).unwrap();
    std::assert_eq!(spec.format, SampleType::UInt16);
    std::assert_eq!(spec.nchannels, 4);
    std::assert_eq!(spec.alpha_channel, Some(4));
    std::assert_eq!(spec.channel_names, vec!["R", "G", "B", "A"]);

    let mut row = vec![0u8; spec.scanline_bytes()];
    input.read_native_scanline(1, &mut row).unwrap();

    let mut samples = vec![0u16; 16];
    NativeEndian::read_u16_into(&row, &mut samples);
    std::assert_eq!(&samples[..4], &[0, 3000, 65535, 512]);
    std::assert_eq!(&samples[12..], &[3000, 3000, 65535, 512]);
}

#[test]
fn test_animated_gif_pages() {
    let file = TempFile::new("anim.gif");
    write_gif(&file, &[[255, 0, 0, 255], [0, 0, 255, 255]], None);

    let mut input = reader();
    let spec = input.open(&file.0).unwrap();
    std::assert!(spec.multi_frame);
    std::assert_eq!(spec.get_int_attribute("oiio:Movie"), Some(1));
    std::assert_eq!(spec.alpha_channel, Some(4));
    std::assert_eq!(input.page_count().unwrap(), 2);

    let mut row = vec![0u8; spec.scanline_bytes()];
    input.read_native_scanline(0, &mut row).unwrap();
    std::assert_eq!(&row[..4], &[255, 0, 0, 255]);

    let spec = input.seek_subimage(1, 0).unwrap();
    std::assert_eq!(input.current_subimage(), 1);
    std::assert!(spec.multi_frame);
    input.read_native_scanline(2, &mut row).unwrap();
    std::assert_eq!(&row[8..], &[0, 0, 255, 255]);

    std::assert!(matches!(input.seek_subimage(2, 0), Err(ImageIoError::PageNotFound { .. })));
    std::assert_eq!(input.current_subimage(), 1);

    input.seek_subimage(0, 0).unwrap();
    input.read_native_scanline(1, &mut row).unwrap();
    std::assert_eq!(&row[..4], &[255, 0, 0, 255]);
}

#[test]
fn test_gif_loop_count() {
    let file = TempFile::new("loop3.gif");
    write_gif(&file, &[[255, 0, 0, 255], [0, 255, 0, 255]], Some(Repeat::Finite(3)));

    let mut input = reader();
    let spec = input.open(&file.0).unwrap();
    std::assert_eq!(spec.get_int_attribute("gif:LoopCount"), Some(3));
    std::assert_eq!(spec.get_int_attribute("oiio:Movie"), Some(1));

    let spec = input.seek_subimage(1, 0).unwrap();
    std::assert_eq!(spec.get_int_attribute("gif:LoopCount"), Some(3));
}

#[test]
fn test_gif_endless_loop_not_reported() {
    let file = TempFile::new("forever.gif");
    write_gif(&file, &[[255, 0, 0, 255], [0, 255, 0, 255]], Some(Repeat::Infinite));

    let mut input = reader();
    let spec = input.open(&file.0).unwrap();
    std::assert_eq!(spec.get_int_attribute("gif:LoopCount"), None);
    std::assert!(spec.multi_frame);
}

#[test]
fn test_gif_pages_in_any_order() {
    let file = TempFile::new("five.gif");
    let colors = [
        [255, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
        [255, 255, 0, 255],
        [0, 255, 255, 255],
    ];
    write_gif(&file, &colors, None);

    let mut input = reader();
    input.open(&file.0).unwrap();
    std::assert_eq!(input.page_count().unwrap(), 5);

    let mut row = vec![0u8; 12];
    for page in [4, 0, 3, 1, 2, 4] {
        input.seek_subimage(page, 0).unwrap();
        input.read_native_scanline(1, &mut row).unwrap();
        std::assert_eq!(&row[4..8], &colors[page as usize]);
    }
}

#[test]
fn test_logger_installs_globally() {
    let file = TempFile::new("global.log");
    Logger::init_global_logger(file.0.to_str().unwrap(), LevelFilter::Off).unwrap();
    std::assert!(file.0.exists());
    std::assert_eq!(log::max_level(), LevelFilter::Off);
}

#[test]
fn test_cli_lists_extensions() {
    let log_file = TempFile::new("cli.log");
    let config = TempFile::new("cli.toml");
    let log_path = log_file.0.to_str().unwrap().replace('\\', "/");
    fs::write(&config.0, format!("[logging]\nfile = \"{}\"\nlevel = \"off\"\n", log_path)).unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_cgimageio"))
        .arg("--extensions")
        .arg("--config")
        .arg(&config.0)
        .output()
        .unwrap();

    std::assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    std::assert!(stdout.contains("Format 'coregraphics'"));
    std::assert!(stdout.contains("gif"));
}

#[test]
fn test_non_image_file_rejected() {
    let file = TempFile::new("notes.txt");
    fs::write(&file.0, b"not an image at all").unwrap();

    let mut input = reader();
    std::assert!(!input.valid_file(&file.0));
    std::assert!(matches!(input.open(&file.0), Err(ImageIoError::InvalidContainer(_))));
    std::assert_eq!(input.current_subimage(), -1);
}

#[test]
fn test_logger_writes_records() {
    let file = TempFile::new("test.log");
    let logger = Logger::new(file.0.to_str().unwrap(), LevelFilter::Debug).unwrap().quiet();
    logger.write_line("[INFO] cgimageio: opened").unwrap();
    logger.write_line("[DEBUG] cgimageio: closed").unwrap();

    let contents = fs::read_to_string(&file.0).unwrap();
    std::assert_eq!(contents, "[INFO] cgimageio: opened\n[DEBUG] cgimageio: closed\n");
}
