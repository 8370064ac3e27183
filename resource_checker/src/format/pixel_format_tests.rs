/// Unit tests for pixel_format.rs

use super::PixelFormat;
use super::PixelFormat::*;

#[test]
fn test_uncompressed_bits_per_pixel() {
    assert_eq!(Alpha8.bits_per_pixel(), 8.0);
    assert_eq!(ARGB4444.bits_per_pixel(), 16.0);
    assert_eq!(RGBA4444.bits_per_pixel(), 16.0);
    assert_eq!(RGB565.bits_per_pixel(), 16.0);
    assert_eq!(RGB24.bits_per_pixel(), 24.0);
    assert_eq!(RGBA32.bits_per_pixel(), 32.0);
    assert_eq!(ARGB32.bits_per_pixel(), 32.0);
    assert_eq!(BGRA32.bits_per_pixel(), 32.0);
    assert_eq!(RGB9e5Float.bits_per_pixel(), 32.0);
}

#[test]
fn test_block_compressed_bits_per_pixel() {
    assert_eq!(DXT1.bits_per_pixel(), 4.0);
    assert_eq!(DXT5.bits_per_pixel(), 8.0);
    assert_eq!(BC4.bits_per_pixel(), 4.0);
    assert_eq!(BC5.bits_per_pixel(), 8.0);
    assert_eq!(BC6H.bits_per_pixel(), 8.0);
    assert_eq!(BC7.bits_per_pixel(), 8.0);
    assert_eq!(PVRTC_RGB2.bits_per_pixel(), 2.0);
    assert_eq!(PVRTC_RGBA4.bits_per_pixel(), 4.0);
    assert_eq!(ETC_RGB4.bits_per_pixel(), 4.0);
    assert_eq!(ETC2_RGB.bits_per_pixel(), 4.0);
    assert_eq!(ETC2_RGBA8.bits_per_pixel(), 8.0);
    assert_eq!(EAC_R.bits_per_pixel(), 4.0);
}

#[test]
fn test_crunched_formats_cost_the_same_as_uncrunched() {
    assert_eq!(DXT1Crunched.bits_per_pixel(), DXT1.bits_per_pixel());
    assert_eq!(DXT5Crunched.bits_per_pixel(), DXT5.bits_per_pixel());
    assert_eq!(ETC_RGB4Crunched.bits_per_pixel(), ETC_RGB4.bits_per_pixel());
}

#[test]
fn test_astc_fractional_bits_per_pixel() {
    assert_eq!(ASTC_4x4.bits_per_pixel(), 8.0);
    assert_eq!(ASTC_5x5.bits_per_pixel(), 5.12);
    assert_eq!(ASTC_6x6.bits_per_pixel(), 3.56);
    assert_eq!(ASTC_8x8.bits_per_pixel(), 2.0);
    assert_eq!(ASTC_10x10.bits_per_pixel(), 1.28);
    assert_eq!(ASTC_12x12.bits_per_pixel(), 0.89);
}

#[test]
fn test_astc_hdr_matches_ldr_block_sizes() {
    let pairs = [
        (ASTC_4x4, ASTC_HDR_4x4),
        (ASTC_5x5, ASTC_HDR_5x5),
        (ASTC_6x6, ASTC_HDR_6x6),
        (ASTC_8x8, ASTC_HDR_8x8),
        (ASTC_10x10, ASTC_HDR_10x10),
        (ASTC_12x12, ASTC_HDR_12x12),
    ];
    for (ldr, hdr) in pairs {
        assert_eq!(ldr.bits_per_pixel(), hdr.bits_per_pixel(), "{:?}", hdr);
    }
}

#[test]
fn test_unsized_formats_return_exactly_zero() {
    for format in [WiiI4, WiiI8, WiiIA4, WiiIA8, WiiRGB565, WiiRGB5A3, WiiRGBA8, WiiCMPR] {
        assert_eq!(format.bits_per_pixel(), 0.0);
        assert!(!format.is_sized());
    }
    assert!(RGBA32.is_sized());
}

#[test]
fn test_is_crunched() {
    assert!(DXT1Crunched.is_crunched());
    assert!(DXT5Crunched.is_crunched());
    assert!(ETC_RGB4Crunched.is_crunched());
    assert!(ETC2_RGBA8Crunched.is_crunched());
    assert!(!DXT1.is_crunched());
    assert!(!RGBA32.is_crunched());
}

#[test]
fn test_pixel_format_serde_uses_variant_names() {
    let json = serde_json::to_string(&PixelFormat::ASTC_HDR_6x6).unwrap();
    assert_eq!(json, "\"ASTC_HDR_6x6\"");
    let back: PixelFormat = serde_json::from_str("\"PVRTC_RGBA2\"").unwrap();
    assert_eq!(back, PVRTC_RGBA2);
}
