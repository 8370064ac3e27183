/// Texture memory estimation.
///
/// Sums the footprint of every mip level the texture stores. The figure is an
/// estimate: encoder padding and block alignment for non-power-of-two sizes
/// are never observed, so block-compressed textures may be slightly under.

use serde::{Deserialize, Serialize};
use super::PixelFormat;

/// Mip levels assumed for array textures.
///
/// The true chain length of an array texture is not reliably reported by
/// hosts, so arrays always walk levels 0 through 10.
pub const ARRAY_ASSUMED_MIP_LEVELS: u32 = 11;

/// Faces stored by a cubemap
pub const CUBE_FACE_COUNT: u32 = 6;

/// Storage layout of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureShape {
    /// Single 2D image with its own mip chain
    Plane,
    /// Six square faces
    Cube,
    /// Stack of same-sized 2D slices
    Array {
        /// Number of slices
        depth: u32,
    },
}

impl TextureShape {
    /// Number of array slices (1 for planes and cubemaps)
    pub fn depth(self) -> u32 {
        match self {
            TextureShape::Array { depth } => depth,
            _ => 1,
        }
    }
}

/// Estimate the storage of a texture in bytes.
///
/// - `Plane`: walks `mip_count` levels starting at full resolution, halving
///   both dimensions with integer division after each level. `mip_count` is
///   the host-reported chain length, which already stops at 1x1.
/// - `Cube`: base level only, times six faces. The mip chain is ignored.
/// - `Array`: walks `ARRAY_ASSUMED_MIP_LEVELS` levels, times the slice count.
///   `mip_count` is ignored.
///
/// Zero-area textures and unsized formats estimate to 0.
///
/// # Example
///
/// ```
/// use resource_checker::rescheck::format::{estimate_bytes, PixelFormat, TextureShape};
///
/// let bytes = estimate_bytes(TextureShape::Plane, 64, 64, PixelFormat::RGBA32, 1);
/// assert_eq!(bytes, 16384.0);
/// ```
pub fn estimate_bytes(
    shape: TextureShape,
    width: u32,
    height: u32,
    format: PixelFormat,
    mip_count: u32,
) -> f64 {
    let bits_per_pixel = format.bits_per_pixel();

    match shape {
        TextureShape::Plane => mip_chain_bytes(width, height, bits_per_pixel, mip_count),
        TextureShape::Cube => {
            level_bytes(width, height, bits_per_pixel) * CUBE_FACE_COUNT as f64
        }
        TextureShape::Array { depth } => {
            mip_chain_bytes(width, height, bits_per_pixel, ARRAY_ASSUMED_MIP_LEVELS)
                * depth as f64
        }
    }
}

fn level_bytes(width: u32, height: u32, bits_per_pixel: f64) -> f64 {
    width as f64 * height as f64 * bits_per_pixel / 8.0
}

fn mip_chain_bytes(mut width: u32, mut height: u32, bits_per_pixel: f64, levels: u32) -> f64 {
    let mut total = 0.0;
    for _ in 0..levels {
        total += level_bytes(width, height, bits_per_pixel);
        width /= 2;
        height /= 2;
    }
    total
}

/// Human-readable size for a kilobyte figure.
///
/// Below 1024 KB the raw figure is printed with a `k` suffix; above, megabytes
/// with two decimals.
///
/// ```
/// use resource_checker::rescheck::format::format_size_kb;
///
/// assert_eq!(format_size_kb(16.0), "16k");
/// assert_eq!(format_size_kb(1536.0), "1.50Mb");
/// ```
pub fn format_size_kb(size_kb: f64) -> String {
    if size_kb < 1024.0 {
        format!("{}k", size_kb)
    } else {
        format!("{:.2}Mb", size_kb / 1024.0)
    }
}

#[cfg(test)]
#[path = "texture_size_tests.rs"]
mod tests;
