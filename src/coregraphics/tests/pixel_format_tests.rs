//! Tests for pixel format inference

use crate::coregraphics::constants::{alpha_info, bitmap_info};
use crate::coregraphics::errors::ImageIoError;
use crate::coregraphics::native::{AlphaInfo, BitmapInfo};
use crate::coregraphics::spec::{AlphaPosition, ChannelLayout, ImageSpec, PixelFormat, SampleType};

use super::fake_source::{FakePageSpec, FakeSource};
use crate::coregraphics::native::NativeContainer;

fn derive(page: FakePageSpec) -> Result<PixelFormat, ImageIoError> {
    let container = FakeSource::new(vec![page]).container();
    let page = container.decode_page(0).unwrap();
    PixelFormat::derive(&page)
}

#[test]
fn test_sample_type_from_depth() {
    assert_eq!(SampleType::from_depth(8, false).unwrap(), SampleType::UInt8);
    assert_eq!(SampleType::from_depth(8, true).unwrap(), SampleType::UInt8);
    assert_eq!(SampleType::from_depth(16, false).unwrap(), SampleType::UInt16);
    assert_eq!(SampleType::from_depth(16, true).unwrap(), SampleType::Half);
    assert_eq!(SampleType::from_depth(32, false).unwrap(), SampleType::UInt32);
    assert_eq!(SampleType::from_depth(32, true).unwrap(), SampleType::Float);
}

#[test]
fn test_unsupported_sample_depth() {
    for bits in [1, 4, 5, 10, 12, 24, 64] {
        match SampleType::from_depth(bits, false) {
            Err(ImageIoError::UnsupportedSampleDepth(b)) => assert_eq!(b, bits),
            other => panic!("expected UnsupportedSampleDepth for {}, got {:?}", bits, other),
        }
    }
}

#[test]
fn test_alpha_layout_mapping() {
    let cases = [
        (AlphaInfo::None, 3, AlphaPosition::None),
        (AlphaInfo::NoneSkipLast, 4, AlphaPosition::None),
        (AlphaInfo::NoneSkipFirst, 4, AlphaPosition::None),
        (AlphaInfo::Last, 4, AlphaPosition::Last),
        (AlphaInfo::PremultipliedLast, 4, AlphaPosition::Last),
        (AlphaInfo::First, 4, AlphaPosition::First),
        (AlphaInfo::PremultipliedFirst, 4, AlphaPosition::First),
        (AlphaInfo::Only, 1, AlphaPosition::First),
    ];

    for (alpha, channels, position) in cases {
        let layout = ChannelLayout::for_alpha(alpha);
        assert_eq!(layout.channels, channels, "{:?}", alpha);
        assert_eq!(layout.alpha, position, "{:?}", alpha);
    }
}

#[test]
fn test_alpha_index_in_host_convention() {
    let none = derive(FakePageSpec::new(2, 2, 8, AlphaInfo::None, false)).unwrap();
    assert_eq!((none.channels, none.alpha_index()), (3, None));

    let only = derive(FakePageSpec::new(2, 2, 8, AlphaInfo::Only, false)).unwrap();
    assert_eq!((only.channels, only.alpha_index()), (1, Some(0)));

    let first = derive(FakePageSpec::new(2, 2, 8, AlphaInfo::First, false)).unwrap();
    assert_eq!((first.channels, first.alpha_index()), (4, Some(0)));

    let last = derive(FakePageSpec::new(2, 2, 8, AlphaInfo::Last, false)).unwrap();
    assert_eq!((last.channels, last.alpha_index()), (4, Some(4)));

    let padded = derive(FakePageSpec::new(2, 2, 8, AlphaInfo::NoneSkipFirst, false)).unwrap();
    assert_eq!((padded.channels, padded.alpha_index()), (4, None));
}

#[test]
fn test_derive_reads_dimensions_and_float_flag() {
    let format = derive(FakePageSpec::new(7, 3, 32, AlphaInfo::PremultipliedLast, true)).unwrap();
    assert_eq!(format.width, 7);
    assert_eq!(format.height, 3);
    assert_eq!(format.sample, SampleType::Float);
    assert_eq!(format.row_stride(), 7 * 4 * 4);
}

#[test]
fn test_derive_rejects_odd_depth() {
    let result = derive(FakePageSpec::new(2, 2, 12, AlphaInfo::None, false));
    assert!(matches!(result, Err(ImageIoError::UnsupportedSampleDepth(12))));
}

#[test]
fn test_unknown_alpha_code_keeps_four_channels() {
    let page = FakePageSpec::new(2, 2, 8, AlphaInfo::Last, false)
        .with_bitmap_info(BitmapInfo::from_raw(bitmap_info::ALPHA_INFO_MASK));
    let format = derive(page).unwrap();
    assert_eq!(format.channels, 4);
    assert_eq!(format.alpha, AlphaPosition::None);
}

#[test]
fn test_bitmap_info_raw_decoding() {
    let info = BitmapInfo::from_raw(alpha_info::PREMULTIPLIED_FIRST | bitmap_info::FLOAT_COMPONENTS);
    assert!(info.is_float());
    assert_eq!(info.alpha_info(), Some(AlphaInfo::PremultipliedFirst));

    let info = BitmapInfo::new(AlphaInfo::NoneSkipLast, false);
    assert!(!info.is_float());
    assert_eq!(info.raw(), alpha_info::NONE_SKIP_LAST);
}

#[test]
fn test_channel_names_follow_layout() {
    let names = |alpha| derive(FakePageSpec::new(1, 1, 8, alpha, false)).unwrap().channel_names();
    assert_eq!(names(AlphaInfo::None), vec!["R", "G", "B"]);
    assert_eq!(names(AlphaInfo::Last), vec!["R", "G", "B", "A"]);
    assert_eq!(names(AlphaInfo::First), vec!["A", "R", "G", "B"]);
    assert_eq!(names(AlphaInfo::Only), vec!["A"]);
}

#[test]
fn test_spec_from_pixel_format() {
    let format = derive(FakePageSpec::new(5, 6, 16, AlphaInfo::Last, false)).unwrap();
    let spec = ImageSpec::from_pixel_format(&format);
    assert_eq!(spec.width, 5);
    assert_eq!(spec.height, 6);
    assert_eq!(spec.format, SampleType::UInt16);
    assert_eq!(spec.nchannels, 4);
    assert_eq!(spec.alpha_channel, Some(4));
    assert_eq!(spec.scanline_bytes(), format.row_stride());
    assert!(!spec.multi_frame);
    assert!(spec.attributes.is_empty());
}

#[test]
fn test_spec_and_format_agree_on_stride() {
    let cases = [
        (AlphaInfo::None, 8, false),
        (AlphaInfo::Only, 8, false),
        (AlphaInfo::Last, 16, false),
        (AlphaInfo::First, 16, true),
        (AlphaInfo::NoneSkipLast, 32, false),
        (AlphaInfo::PremultipliedLast, 32, true),
    ];

    for (alpha, bits, float) in cases {
        let format = derive(FakePageSpec::new(9, 2, bits, alpha, float)).unwrap();
        let spec = ImageSpec::from_pixel_format(&format);
        let expected = 9 * format.channels as usize * (bits as usize / 8);
        assert_eq!(format.row_stride(), expected, "{:?} {}", alpha, bits);
        assert_eq!(spec.scanline_bytes(), expected, "{:?} {}", alpha, bits);
        assert_eq!(format.bytes_per_pixel() * 9, expected);
    }
}

#[test]
fn test_sample_row_bytes() {
    assert_eq!(SampleType::UInt8.row_bytes(10, 3), 30);
    assert_eq!(SampleType::Half.row_bytes(10, 4), 80);
    assert_eq!(SampleType::Float.row_bytes(3, 1), 12);
    assert_eq!(SampleType::UInt32.row_bytes(0, 4), 0);
}
