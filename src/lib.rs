//! Resolution presets and generation-ready size computation, with image and
//! tensor adaptation for a node-graph generation host.
//!
//! The core is pure arithmetic — preset catalogs, derived sizing, aspect and
//! tier classification. The `raster` feature (default) adds pixel operations
//! and the host's batched tensor interchange, plus the node entry points.
//!
//! # Modules
//!
//! - [`presets`] — Per-family preset catalogs and the selection resolver
//! - [`sizing`] — Scale/aspect/edge size arithmetic, snapping, clamping
//! - [`info`] — Aspect/tier classification and the summary report
//! - [`raster`] — Crop-to-fit, stretch, and edge-targeted resizing (`raster`)
//! - [`tensor`] — Channel-first tensor ↔ image conversions (`raster`)
//! - [`nodes`] — Thin host adapters and the registration catalog (`raster`)

#![forbid(unsafe_code)]

pub mod info;
pub mod presets;
pub mod sizing;

#[cfg(feature = "raster")]
pub mod nodes;
#[cfg(feature = "raster")]
pub mod raster;
#[cfg(feature = "raster")]
pub mod tensor;

// Re-exports: core types
pub use info::{ResolutionInfo, ResolutionTier, closest_aspect_name};
pub use presets::{Preset, PresetError, PresetFamily, PresetSelection};
pub use sizing::{
    DEFAULT_SIZE, DIMENSION_STEP, EdgeTarget, MAX_DIMENSION, MIN_DIMENSION, OptimalSize, Size,
    SizeError, clamp_size, edge_fit, floor_to_multiple,
};

#[cfg(feature = "raster")]
pub use nodes::{
    EdgeResize, ImageNodeOutput, ImageNodeParams, LatentNodeOutput, LatentNodeParams, NODES,
    NodeSpec, SetterNodeOutput, SetterNodeParams, run_image_node, run_latent_node, run_setter_node,
};
#[cfg(feature = "raster")]
pub use raster::{CropMethod, ResampleFilter, resize_by_edge, resize_with_crop};
#[cfg(feature = "raster")]
pub use tensor::{
    TensorError, empty_latent, image_from_tensor, mask_from_tensor, mask_to_tensor,
    tensor_from_image,
};
