//! Geometric transforms on image objects: crop-to-fit, stretch, and
//! edge-targeted resizing.
//!
//! Resampling itself is delegated to the `image` crate; this module only
//! selects kernels and target geometry.

use image::DynamicImage;
use image::imageops::FilterType;
use log::warn;

use crate::sizing::{EdgeTarget, edge_fit};

/// Interpolation kernel for resize operations.
///
/// Variants mirror the host's widget choices; each maps to the nearest
/// `image` crate kernel ([`filter_type`](Self::filter_type)).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResampleFilter {
    Nearest,
    Box,
    Bilinear,
    Hamming,
    Bicubic,
    /// High-quality default.
    #[default]
    Lanczos,
}

impl ResampleFilter {
    /// Parse a host widget string, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Lanczos`](Self::Lanczos) — a
    /// deliberate leniency policy, not an error path.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "nearest" => Self::Nearest,
            "box" => Self::Box,
            "bilinear" => Self::Bilinear,
            "hamming" => Self::Hamming,
            "bicubic" => Self::Bicubic,
            "lanczos" => Self::Lanczos,
            other => {
                warn!("unknown resample filter {other:?}, falling back to lanczos");
                Self::Lanczos
            }
        }
    }

    /// The nearest-equivalent `image` crate kernel.
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            // No box kernel in `image`; triangle is the closest separable one.
            Self::Box => FilterType::Triangle,
            Self::Bilinear => FilterType::Triangle,
            Self::Hamming => FilterType::Gaussian,
            Self::Bicubic => FilterType::CatmullRom,
            Self::Lanczos => FilterType::Lanczos3,
        }
    }
}

/// How to reach exact target dimensions when aspect ratios differ.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CropMethod {
    /// Scale to cover the target box preserving aspect, then crop the
    /// centered overflow. No letterboxing.
    #[default]
    CenterCrop,
    /// Direct resize to the target, ignoring source aspect.
    Stretch,
}

/// Resize to exactly `width`×`height` using the given crop method and kernel.
pub fn resize_with_crop(
    image: &DynamicImage,
    width: u32,
    height: u32,
    method: CropMethod,
    filter: ResampleFilter,
) -> DynamicImage {
    match method {
        CropMethod::CenterCrop => image.resize_to_fill(width, height, filter.filter_type()),
        CropMethod::Stretch => image.resize_exact(width, height, filter.filter_type()),
    }
}

/// Resize so the selected edge equals `length`, preserving aspect ratio.
///
/// Always resamples with the Lanczos kernel, irrespective of any
/// caller-selected filter — [`resize_with_crop`] honors the selection, this
/// path does not. Documented behavior, preserved from the host plugin this
/// reimplements.
pub fn resize_by_edge(image: &DynamicImage, edge: EdgeTarget, length: u32) -> DynamicImage {
    let target = edge_fit(image.width(), image.height(), edge, length);
    image.resize_exact(target.width, target.height, FilterType::Lanczos3)
}
