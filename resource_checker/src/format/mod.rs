//! Texture format and size estimation
//!
//! Pure functions only: bits-per-pixel lookup, texture memory estimation,
//! and human-readable size labels.

mod pixel_format;
mod texture_size;

pub use pixel_format::PixelFormat;
pub use texture_size::{
    TextureShape, estimate_bytes, format_size_kb,
    ARRAY_ASSUMED_MIP_LEVELS, CUBE_FACE_COUNT,
};
