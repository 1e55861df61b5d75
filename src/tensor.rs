//! Host tensor interchange: batched channel-first arrays ↔ image objects.
//!
//! The host hands images around as `(1, C, H, W)` `f32` arrays in `[0, 1]`
//! and masks as `(1, H, W)`. Conversions here strip/restore the batch axis,
//! normalize value ranges, and reorder channel layout; anything outside that
//! contract is a typed error, not a panic.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array3, Array4};
use thiserror::Error;

use crate::sizing::Size;

/// Channels in the host's latent layout.
pub const LATENT_CHANNELS: usize = 4;

/// Spatial downscale between pixel space and latent space.
pub const LATENT_DOWNSCALE: u32 = 8;

/// Tensor interchange error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TensorError {
    /// The batch axis must have length 1.
    #[error("expected batch size 1, got {0}")]
    BatchSize(usize),
    /// Image tensors carry 1, 3, or 4 channels.
    #[error("unsupported channel count {0} (expected 1, 3, or 4)")]
    ChannelCount(usize),
    /// A spatial axis has zero length.
    #[error("tensor has a zero-sized spatial axis ({width}x{height})")]
    EmptySpatialAxis { width: usize, height: usize },
}

/// Scale factor that maps tensor values onto `[0, 255]`.
///
/// Data already in the 8-bit range (any value > 1.0) passes through
/// unscaled, mirroring the host's loose convention.
fn byte_scale<'a>(values: impl Iterator<Item = &'a f32>) -> f32 {
    let peak = values.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
    if peak <= 1.0 { 255.0 } else { 1.0 }
}

fn to_byte(value: f32, scale: f32) -> u8 {
    (value * scale).round().clamp(0.0, 255.0) as u8
}

/// Convert a `(1, C, H, W)` image tensor to an RGB image.
///
/// C = 1 broadcasts to gray RGB; C = 4 drops the alpha plane. Values in
/// `[0, 1]` are scaled to `[0, 255]`.
pub fn image_from_tensor(tensor: &Array4<f32>) -> Result<DynamicImage, TensorError> {
    let (batch, channels, height, width) = tensor.dim();
    if batch != 1 {
        return Err(TensorError::BatchSize(batch));
    }
    if !matches!(channels, 1 | 3 | 4) {
        return Err(TensorError::ChannelCount(channels));
    }
    if width == 0 || height == 0 {
        return Err(TensorError::EmptySpatialAxis { width, height });
    }

    let scale = byte_scale(tensor.iter());
    let mut out = RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let channel = |c: usize| to_byte(tensor[[0, c, y, x]], scale);
            let rgb = if channels == 1 {
                let v = channel(0);
                [v, v, v]
            } else {
                [channel(0), channel(1), channel(2)]
            };
            out.put_pixel(x as u32, y as u32, Rgb(rgb));
        }
    }
    Ok(DynamicImage::ImageRgb8(out))
}

/// Convert an image to a `(1, 3, H, W)` tensor in `[0, 1]`.
///
/// Alpha is dropped; grayscale is broadcast to three channels.
pub fn tensor_from_image(image: &DynamicImage) -> Array4<f32> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut out = Array4::zeros((1, 3, height as usize, width as usize));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            out[[0, c, y as usize, x as usize]] = pixel[c] as f32 / 255.0;
        }
    }
    out
}

/// Convert a `(1, H, W)` mask tensor to a grayscale image.
pub fn mask_from_tensor(mask: &Array3<f32>) -> Result<GrayImage, TensorError> {
    let (batch, height, width) = mask.dim();
    if batch != 1 {
        return Err(TensorError::BatchSize(batch));
    }
    if width == 0 || height == 0 {
        return Err(TensorError::EmptySpatialAxis { width, height });
    }

    let scale = byte_scale(mask.iter());
    let mut out = GrayImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(x as u32, y as u32, Luma([to_byte(mask[[0, y, x]], scale)]));
        }
    }
    Ok(out)
}

/// Convert a grayscale image to a `(1, H, W)` mask tensor in `[0, 1]`.
pub fn mask_to_tensor(mask: &GrayImage) -> Array3<f32> {
    let (width, height) = mask.dimensions();
    let mut out = Array3::zeros((1, height as usize, width as usize));
    for (x, y, pixel) in mask.enumerate_pixels() {
        out[[0, y as usize, x as usize]] = pixel[0] as f32 / 255.0;
    }
    out
}

/// Zero-filled image tensor — the fallback when an optional image input is
/// absent.
pub fn empty_image_tensor(size: Size) -> Array4<f32> {
    Array4::zeros((1, 3, size.height as usize, size.width as usize))
}

/// Zero-filled mask tensor.
pub fn empty_mask_tensor(size: Size) -> Array3<f32> {
    Array3::zeros((1, size.height as usize, size.width as usize))
}

/// Zero-filled latent tensor of shape `(1, 4, h/8, w/8)` for the given pixel
/// size. Dimensions are expected to be multiples of [`LATENT_DOWNSCALE`];
/// the remainder is truncated like the host does.
pub fn empty_latent(size: Size) -> Array4<f32> {
    Array4::zeros((
        1,
        LATENT_CHANNELS,
        (size.height / LATENT_DOWNSCALE) as usize,
        (size.width / LATENT_DOWNSCALE) as usize,
    ))
}
