use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::separable_filter_equal;
use imageproc::map::map_colors;

use crate::detection::edges::canny;
use crate::error::{CoinscanError, Result};

/// Convert image to grayscale with Rec.601 luma weights
/// (0.299 R + 0.587 G + 0.114 B), rounded in 14-bit fixed point.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    map_colors(&img.to_rgb8(), |p| {
        let [r, g, b] = p.0;
        let y = (r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << 13)) >> 14;
        Luma([y as u8])
    })
}

/// Sigma used for a kernel of side `size` when `sigma` is not positive.
pub fn effective_sigma(size: u32, sigma: f32) -> f32 {
    if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

/// Normalized 1-D Gaussian weights of odd length `size`.
pub fn gaussian_kernel(size: u32, sigma: f32) -> Result<Vec<f32>> {
    if size == 0 || size % 2 == 0 {
        return Err(CoinscanError::InvalidParams {
            message: format!("Gaussian kernel size must be odd and positive, got {size}"),
        });
    }

    let sigma = effective_sigma(size, sigma);
    let radius = (size / 2) as i32;
    let scale = -0.5 / (sigma * sigma);

    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (scale * (i * i) as f32).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    Ok(kernel)
}

/// Apply a `size` x `size` Gaussian blur to reduce noise
pub fn apply_blur(img: &GrayImage, size: u32, sigma: f32) -> Result<GrayImage> {
    let kernel = gaussian_kernel(size, sigma)?;
    Ok(separable_filter_equal(img, &kernel))
}

/// Detect edges using Canny with L1 gradient magnitude
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}
