//! Node entry points: thin adapters between the host's parameter surface and
//! the core modules.
//!
//! Each node is a parameter struct plus a `run` function with a fixed output
//! shape. No logic lives here beyond assembling inputs, clamping them to the
//! widget bounds, and formatting the summary report; everything else is a
//! call into [`presets`](crate::presets), [`sizing`](crate::sizing),
//! [`raster`](crate::raster), and [`tensor`](crate::tensor).

use image::DynamicImage;
use log::{debug, warn};
use ndarray::{Array3, Array4};

use crate::info::ResolutionInfo;
use crate::presets::PresetSelection;
use crate::raster::{CropMethod, ResampleFilter, resize_by_edge, resize_with_crop};
use crate::sizing::{EdgeTarget, MAX_DIMENSION, MIN_DIMENSION, Size, clamp_size};
use crate::tensor::{
    TensorError, empty_image_tensor, empty_latent, empty_mask_tensor, image_from_tensor,
    mask_from_tensor, mask_to_tensor, tensor_from_image,
};

/// Category all nodes register under.
pub const NODE_CATEGORY: &str = "ResolutionPresets";

/// Output size when edge-resize mode runs with no image input.
const EDGE_FALLBACK: Size = Size::new(512, 512);

/// Host-facing registration entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeSpec {
    /// Stable node identifier.
    pub id: &'static str,
    /// Menu display name.
    pub display_name: &'static str,
    /// Menu category.
    pub category: &'static str,
}

/// The registration catalog.
pub static NODES: &[NodeSpec] = &[
    NodeSpec {
        id: "ResolutionPresetImage",
        display_name: "Resolution Preset (Image)",
        category: NODE_CATEGORY,
    },
    NodeSpec {
        id: "ResolutionPresetLatent",
        display_name: "Resolution Preset (Latent)",
        category: NODE_CATEGORY,
    },
    NodeSpec {
        id: "ResolutionPresetSetter",
        display_name: "Resolution Preset Setter",
        category: NODE_CATEGORY,
    },
];

/// Edge-targeted resize request: which edge, and its target length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeResize {
    pub edge: EdgeTarget,
    pub length: u32,
}

/// Parameters of the image node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageNodeParams {
    pub selection: PresetSelection,
    pub crop_method: CropMethod,
    pub filter: ResampleFilter,
    /// When set, edge-targeted resizing replaces the preset path entirely.
    pub edge_resize: Option<EdgeResize>,
}

/// Image node outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageNodeOutput {
    pub image: Array4<f32>,
    pub mask: Array3<f32>,
    pub width: u32,
    pub height: u32,
}

/// Run the image node. Both inputs are optional; absent ones come back as
/// zero-filled tensors of the output size.
pub fn run_image_node(
    params: &ImageNodeParams,
    image: Option<&Array4<f32>>,
    mask: Option<&Array3<f32>>,
) -> Result<ImageNodeOutput, TensorError> {
    if let Some(edge_resize) = params.edge_resize {
        return run_edge_resize(edge_resize, image, mask);
    }

    let size = params.selection.resolve();
    debug!("preset selection resolved to {size}");

    let image_out = match image {
        Some(tensor) => {
            let decoded = image_from_tensor(tensor)?;
            let resized = resize_with_crop(
                &decoded,
                size.width,
                size.height,
                params.crop_method,
                params.filter,
            );
            tensor_from_image(&resized)
        }
        None => empty_image_tensor(size),
    };

    let mask_out = match mask {
        Some(tensor) => {
            let decoded = DynamicImage::ImageLuma8(mask_from_tensor(tensor)?);
            let resized = resize_with_crop(
                &decoded,
                size.width,
                size.height,
                params.crop_method,
                params.filter,
            );
            mask_to_tensor(&resized.to_luma8())
        }
        None => empty_mask_tensor(size),
    };

    Ok(ImageNodeOutput {
        image: image_out,
        mask: mask_out,
        width: size.width,
        height: size.height,
    })
}

fn run_edge_resize(
    edge_resize: EdgeResize,
    image: Option<&Array4<f32>>,
    mask: Option<&Array3<f32>>,
) -> Result<ImageNodeOutput, TensorError> {
    let length = clamp_length(edge_resize.length);

    let (image_out, size) = match image {
        Some(tensor) => {
            let decoded = image_from_tensor(tensor)?;
            let resized = resize_by_edge(&decoded, edge_resize.edge, length);
            let size = Size::new(resized.width(), resized.height());
            (tensor_from_image(&resized), size)
        }
        None => (empty_image_tensor(EDGE_FALLBACK), EDGE_FALLBACK),
    };

    let mask_out = match mask {
        Some(tensor) => {
            let decoded = DynamicImage::ImageLuma8(mask_from_tensor(tensor)?);
            let resized = resize_by_edge(&decoded, edge_resize.edge, length);
            mask_to_tensor(&resized.to_luma8())
        }
        None => empty_mask_tensor(size),
    };

    Ok(ImageNodeOutput {
        image: image_out,
        mask: mask_out,
        width: size.width,
        height: size.height,
    })
}

/// Parameters of the latent node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LatentNodeParams {
    pub selection: PresetSelection,
    /// Custom size override; `None` uses the preset selection.
    pub custom: Option<Size>,
}

/// Latent node output: a zero-filled `(1, 4, h/8, w/8)` latent tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct LatentNodeOutput {
    pub samples: Array4<f32>,
}

/// Run the latent node.
pub fn run_latent_node(params: &LatentNodeParams) -> LatentNodeOutput {
    let size = resolve_requested(&params.selection, params.custom);
    LatentNodeOutput {
        samples: empty_latent(size),
    }
}

/// Parameters of the setter node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SetterNodeParams {
    pub selection: PresetSelection,
    /// Custom size override; `None` uses the preset selection.
    pub custom: Option<Size>,
}

/// Setter node outputs: the resolved dimensions plus the summary report.
#[derive(Clone, Debug, PartialEq)]
pub struct SetterNodeOutput {
    pub width: u32,
    pub height: u32,
    pub report: String,
}

/// Run the setter node.
pub fn run_setter_node(params: &SetterNodeParams) -> SetterNodeOutput {
    let size = resolve_requested(&params.selection, params.custom);
    let info = ResolutionInfo::compute(size.width, size.height);
    SetterNodeOutput {
        width: size.width,
        height: size.height,
        report: info.report(),
    }
}

/// Custom size wins over the preset selection. Out-of-range values are
/// clamped to the widget bounds, never rejected.
fn resolve_requested(selection: &PresetSelection, custom: Option<Size>) -> Size {
    match custom {
        Some(requested) => {
            let clamped = clamp_size(requested.width, requested.height);
            if clamped != requested {
                warn!("custom size {requested} clamped to {clamped}");
            }
            clamped
        }
        None => {
            let size = selection.resolve();
            debug!("preset selection resolved to {size}");
            size
        }
    }
}

fn clamp_length(length: u32) -> u32 {
    let clamped = length.clamp(MIN_DIMENSION, MAX_DIMENSION);
    if clamped != length {
        warn!("edge length {length} clamped to {clamped}");
    }
    clamped
}
