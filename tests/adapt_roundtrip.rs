//! End-to-end adaptation checks: tensor ↔ image round trips and node-level
//! resize behavior on actual pixel data.

#![cfg(feature = "raster")]

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array4;
use zensize::nodes::{EdgeResize, ImageNodeParams, run_image_node};
use zensize::presets::PresetFamily;
use zensize::raster::{CropMethod, ResampleFilter, resize_with_crop};
use zensize::sizing::EdgeTarget;
use zensize::tensor::{
    image_from_tensor, mask_from_tensor, mask_to_tensor, tensor_from_image,
};

fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 251) as u8, (y % 241) as u8, ((x * 3 + y * 7) % 256) as u8])
    }))
}

#[test]
fn tensor_round_trip_stays_within_one_step() {
    let original = gradient_image(257, 129);
    let tensor = tensor_from_image(&original);
    let restored = image_from_tensor(&tensor).unwrap();

    let a = original.to_rgb8();
    let b = restored.to_rgb8();
    assert_eq!(a.dimensions(), b.dimensions());
    for (pa, pb) in a.pixels().zip(b.pixels()) {
        for c in 0..3 {
            let delta = (pa[c] as i16 - pb[c] as i16).abs();
            assert!(delta <= 1, "channel drifted by {delta}");
        }
    }
}

#[test]
fn double_round_trip_is_stable() {
    // One quantization step maximum, and no further drift on repetition.
    let original = gradient_image(64, 64);
    let once = image_from_tensor(&tensor_from_image(&original)).unwrap();
    let twice = image_from_tensor(&tensor_from_image(&once)).unwrap();
    assert_eq!(once.to_rgb8().as_raw(), twice.to_rgb8().as_raw());
}

#[test]
fn mask_round_trip_is_exact() {
    let mask = GrayImage::from_fn(100, 40, |x, y| Luma([((x + y * 5) % 256) as u8]));
    let restored = mask_from_tensor(&mask_to_tensor(&mask)).unwrap();
    assert_eq!(mask.as_raw(), restored.as_raw());
}

#[test]
fn center_crop_keeps_the_middle() {
    // Three vertical bands; cropping 300×100 to 100×100 keeps only the
    // middle band. Nearest keeps values exact.
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(300, 100, |x, _| {
        if x < 100 {
            Rgb([255, 0, 0])
        } else if x < 200 {
            Rgb([0, 255, 0])
        } else {
            Rgb([0, 0, 255])
        }
    }));
    let out = resize_with_crop(
        &image,
        100,
        100,
        CropMethod::CenterCrop,
        ResampleFilter::Nearest,
    )
    .to_rgb8();
    assert_eq!((out.width(), out.height()), (100, 100));
    for pixel in out.pixels() {
        assert_eq!(pixel.0, [0, 255, 0]);
    }
}

#[test]
fn stretch_keeps_everything_distorted() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(300, 100, |x, _| {
        if x < 150 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
    }));
    let out = resize_with_crop(
        &image,
        100,
        100,
        CropMethod::Stretch,
        ResampleFilter::Nearest,
    )
    .to_rgb8();
    // Both halves survive: left edge red, right edge blue.
    assert_eq!(out.get_pixel(0, 50).0, [255, 0, 0]);
    assert_eq!(out.get_pixel(99, 50).0, [0, 0, 255]);
}

#[test]
fn image_node_preset_path_end_to_end() {
    let mut params = ImageNodeParams {
        crop_method: CropMethod::CenterCrop,
        filter: ResampleFilter::Bilinear,
        ..Default::default()
    };
    params
        .selection
        .select(PresetFamily::Sd15, "3:2 (768x512)")
        .unwrap();

    let input = tensor_from_image(&gradient_image(1000, 500));
    let out = run_image_node(&params, Some(&input), None).unwrap();
    assert_eq!((out.width, out.height), (768, 512));
    assert_eq!(out.image.dim(), (1, 3, 512, 768));
    // Output stays in the host's [0, 1] range.
    assert!(out.image.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn image_node_edge_path_end_to_end() {
    let params = ImageNodeParams {
        edge_resize: Some(EdgeResize {
            edge: EdgeTarget::Longest,
            length: 500,
        }),
        ..Default::default()
    };
    let input = tensor_from_image(&gradient_image(1000, 400));
    let mask = mask_to_tensor(&GrayImage::from_pixel(1000, 400, Luma([255])));
    let out = run_image_node(&params, Some(&input), Some(&mask)).unwrap();
    assert_eq!((out.width, out.height), (500, 200));
    assert_eq!(out.mask.dim(), (1, 200, 500));
    // A solid mask stays solid through the resize.
    assert!(out.mask.iter().all(|&v| v > 0.99));
}

#[test]
fn node_rejects_malformed_batch() {
    let params = ImageNodeParams::default();
    let bad = Array4::<f32>::zeros((2, 3, 8, 8));
    assert!(run_image_node(&params, Some(&bad), None).is_err());
}
