use crate::detection::preprocessing;
use crate::error::Result;
use crate::pipeline::PipelineStep;
use image::DynamicImage;
use tracing::debug;

/// Convert image to grayscale
pub struct GrayscaleStep;

impl PipelineStep for GrayscaleStep {
    fn process(&self, image: DynamicImage) -> Result<DynamicImage> {
        let gray = preprocessing::to_grayscale(&image);
        Ok(DynamicImage::ImageLuma8(gray))
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Apply a square Gaussian blur
pub struct BlurStep {
    pub kernel_size: u32,
    pub sigma: f32,
}

impl PipelineStep for BlurStep {
    fn process(&self, image: DynamicImage) -> Result<DynamicImage> {
        let gray = image.to_luma8();
        debug!(
            kernel = self.kernel_size,
            sigma = preprocessing::effective_sigma(self.kernel_size, self.sigma),
            "blurring"
        );
        let blurred = preprocessing::apply_blur(&gray, self.kernel_size, self.sigma)?;
        Ok(DynamicImage::ImageLuma8(blurred))
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}

/// Detect edges using Canny with L1 gradient magnitude
pub struct EdgeDetectionStep {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl PipelineStep for EdgeDetectionStep {
    fn process(&self, image: DynamicImage) -> Result<DynamicImage> {
        let gray = image.to_luma8();
        let edges = preprocessing::detect_edges(&gray, self.low_threshold, self.high_threshold);
        let edge_pixels = edges.pixels().filter(|p| p[0] > 0).count();
        debug!(edge_pixels, "edge map ready");
        Ok(DynamicImage::ImageLuma8(edges))
    }

    fn name(&self) -> &str {
        "Edge Detection"
    }
}
