//! Generation-ready size arithmetic.
//!
//! Computes derived dimensions from scale factors, target aspect ratios, and
//! edge-length targets, with ceiling/floor clamping and multiple-of snapping.
//! Pure arithmetic — no pixel operations, no allocations.
//!
//! # Example
//!
//! ```
//! use zensize::sizing::{OptimalSize, Size};
//!
//! let size = OptimalSize::new()
//!     .aspect(4, 3)
//!     .compute(1920, 1080)
//!     .unwrap();
//!
//! // 1920/1080 is wider than 4:3 → height kept, width recomputed.
//! assert_eq!(size, Size::new(1440, 1080));
//! ```

use core::fmt;

use thiserror::Error;

/// Smallest dimension the host's widgets accept.
pub const MIN_DIMENSION: u32 = 64;

/// Largest dimension the host's widgets accept.
pub const MAX_DIMENSION: u32 = 8192;

/// Widget step size; also the latent-encoder alignment downstream models need.
pub const DIMENSION_STEP: u32 = 8;

/// Fallback when no preset is selected and no custom size is given.
pub const DEFAULT_SIZE: Size = Size::new(1024, 1024);

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which edge an edge-targeted resize pins to the target length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeTarget {
    /// The longer edge becomes the target length.
    #[default]
    Longest,
    /// The shorter edge becomes the target length.
    Shortest,
}

/// Size computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Source image has zero width or height.
    #[error("source width or height is zero")]
    ZeroSourceDimension,
    /// Target aspect ratio has a zero component.
    #[error("target aspect ratio has a zero component")]
    ZeroAspectRatio,
}

/// Derived-size specification.
///
/// Either scale-based (`scale`) or aspect-targeted (`aspect` takes precedence
/// when set), followed by a longest-side ceiling, a per-dimension floor, and
/// a downward snap to a multiple.
///
/// Defaults match the generation-pipeline conventions: scale 1.0, ceiling
/// 4096, floor 512, snap to multiples of 8.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimalSize {
    pub scale: f64,
    pub target_aspect: Option<(u32, u32)>,
    pub max_side: u32,
    pub min_side: u32,
    pub multiple_of: u32,
}

impl Default for OptimalSize {
    fn default() -> Self {
        Self {
            scale: 1.0,
            target_aspect: None,
            max_side: 4096,
            min_side: 512,
            multiple_of: DIMENSION_STEP,
        }
    }
}

impl OptimalSize {
    /// Create a specification with the default pipeline conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uniform scale factor. Ignored when an aspect target is set.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Target aspect ratio as `width_ratio : height_ratio`.
    ///
    /// The larger dimension shrinks to match the ratio exactly; the other
    /// dimension is kept.
    pub fn aspect(mut self, width_ratio: u32, height_ratio: u32) -> Self {
        self.target_aspect = Some((width_ratio, height_ratio));
        self
    }

    /// Longest-side ceiling. Oversized results are rescaled down uniformly.
    pub fn max_side(mut self, max_side: u32) -> Self {
        self.max_side = max_side;
        self
    }

    /// Per-dimension floor, applied after the ceiling.
    pub fn min_side(mut self, min_side: u32) -> Self {
        self.min_side = min_side;
        self
    }

    /// Snap multiple. Both dimensions are floored to a multiple of this;
    /// values ≤ 1 disable snapping.
    pub fn multiple_of(mut self, multiple_of: u32) -> Self {
        self.multiple_of = multiple_of;
        self
    }

    /// Compute the derived size for a source of the given dimensions.
    pub fn compute(&self, width: u32, height: u32) -> Result<Size, SizeError> {
        if width == 0 || height == 0 {
            return Err(SizeError::ZeroSourceDimension);
        }
        debug_assert!(self.scale.is_finite() && self.scale > 0.0);

        let (mut new_w, mut new_h) = match self.target_aspect {
            Some((rw, rh)) => {
                if rw == 0 || rh == 0 {
                    return Err(SizeError::ZeroAspectRatio);
                }
                let current = width as f64 / height as f64;
                let target = rw as f64 / rh as f64;
                if current > target {
                    // Wider than target — shrink width to match at full height.
                    ((height as f64 * target) as u32, height)
                } else {
                    // Taller than (or equal to) target — shrink height.
                    (width, (width as f64 / target) as u32)
                }
            }
            None => (
                (width as f64 * self.scale) as u32,
                (height as f64 * self.scale) as u32,
            ),
        };

        // Longest-side ceiling: rescale down uniformly to fit.
        let longest = new_w.max(new_h);
        if longest > self.max_side {
            let ratio = self.max_side as f64 / longest as f64;
            new_w = (new_w as f64 * ratio) as u32;
            new_h = (new_h as f64 * ratio) as u32;
        }

        new_w = new_w.max(self.min_side);
        new_h = new_h.max(self.min_side);

        if self.multiple_of > 1 {
            new_w = floor_to_multiple(new_w, self.multiple_of);
            new_h = floor_to_multiple(new_h, self.multiple_of);
        }

        Ok(Size::new(new_w, new_h))
    }
}

/// Scale so the selected edge equals `length`, preserving aspect ratio.
///
/// The free edge is computed with real-valued scaling and floored, clamped to
/// at least 1. Both source dimensions must be ≥ 1.
pub fn edge_fit(width: u32, height: u32, edge: EdgeTarget, length: u32) -> Size {
    debug_assert!(width >= 1 && height >= 1);
    let derived = |fixed: u32, other: u32| {
        ((other as f64 * length as f64 / fixed as f64) as u32).max(1)
    };
    let width_is_target = match edge {
        EdgeTarget::Longest => width >= height,
        EdgeTarget::Shortest => width <= height,
    };
    if width_is_target {
        Size::new(length, derived(width, height))
    } else {
        Size::new(derived(height, width), length)
    }
}

/// Floor `v` to the nearest multiple of `multiple`. Never rounds up.
///
/// Idempotent. Degenerates to 0 for `v < multiple` — callers must clamp to
/// the [`MIN_DIMENSION`] contract first.
pub fn floor_to_multiple(v: u32, multiple: u32) -> u32 {
    debug_assert!(multiple >= 1);
    v - v % multiple
}

/// Clamp both dimensions to the host's `[MIN_DIMENSION, MAX_DIMENSION]`
/// widget bounds. Idempotent.
pub fn clamp_size(width: u32, height: u32) -> Size {
    Size::new(
        width.clamp(MIN_DIMENSION, MAX_DIMENSION),
        height.clamp(MIN_DIMENSION, MAX_DIMENSION),
    )
}
