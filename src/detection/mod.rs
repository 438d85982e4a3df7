pub mod contours;
pub mod edges;
pub mod geometry;
pub mod preprocessing;
pub mod steps;

use image::{DynamicImage, GrayImage, RgbImage};
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

use crate::annotate::{Annotator, hstack};
use crate::config::DetectionParams;
use crate::error::Result;
use crate::models::{Contour, ContourMetrics};
use crate::pipeline::{Pipeline, PipelineContext, prepare_debug_dir};

/// Everything one pass over an image produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Every external contour, before the area filter
    pub contours: Vec<Contour>,
    /// Metrics of the contours that passed the area filter, in contour order
    pub metrics: Vec<ContourMetrics>,
    /// Input with the qualifying contours outlined
    pub outlines: RgbImage,
    /// Input with a marker on each centroid
    pub centroids: RgbImage,
}

impl Analysis {
    /// Number of external contours found.
    pub fn count(&self) -> usize {
        self.contours.len()
    }

    /// Contours dropped by the area filter.
    pub fn skipped(&self) -> usize {
        self.contours.len() - self.metrics.len()
    }

    pub fn degenerate(&self) -> impl Iterator<Item = &ContourMetrics> {
        self.metrics.iter().filter(|m| m.is_degenerate())
    }

    /// Outline and centroid layers side by side.
    pub fn composite(&self) -> Result<RgbImage> {
        hstack(&self.outlines, &self.centroids)
    }
}

/// Main detection pipeline orchestrator
pub struct DetectionPipeline {
    params: DetectionParams,
    context: PipelineContext,
}

impl DetectionPipeline {
    /// Fails if `params` does not validate.
    pub fn new(params: DetectionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            context: PipelineContext::default(),
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Save every intermediate stage image under `output_dir`.
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        self.context.debug = Some(prepare_debug_dir(output_dir)?);
        Ok(self)
    }

    pub fn params(&self) -> &DetectionParams {
        &self.params
    }

    /// Grayscale, blur and Canny as a stage pipeline.
    pub fn edge_pipeline(&self) -> Pipeline {
        build_edge_pipeline(&self.params).with_context(self.context.clone())
    }

    /// Binary edge map of `img`.
    pub fn edges(&self, img: &DynamicImage) -> Result<GrayImage> {
        let edges = self.edge_pipeline().run(img.clone())?;
        Ok(edges.to_luma8())
    }

    /// External contours of `img`, unfiltered.
    pub fn contours(&self, img: &DynamicImage) -> Result<Vec<Contour>> {
        let edges = self.edges(img)?;
        Ok(contours::find_external_contours(&edges))
    }

    /// Run the full pass: edges, contours, metrics and both annotation layers.
    pub fn analyze(&self, img: &DynamicImage) -> Result<Analysis> {
        let edges = self.edges(img)?;
        Ok(self.measure(img, &edges))
    }

    /// Contours, metrics and annotation layers for a precomputed edge map
    /// of `img`.
    pub fn measure(&self, img: &DynamicImage, edges: &GrayImage) -> Analysis {
        let all_contours = contours::find_external_contours(edges);
        if self.context.verbose {
            info!("found {} contours", all_contours.len());
        } else {
            debug!("found {} contours", all_contours.len());
        }

        let mut annotator = Annotator::new(&img.to_rgb8());
        let mut metrics = Vec::new();

        for contour in &all_contours {
            let area = contour.area();
            if area < self.params.min_area {
                trace!(index = contour.index, area, "below minimum area");
                continue;
            }

            let m = contour.metrics();
            match m.centroid {
                Some(centroid) => annotator.draw_centroid(centroid),
                None => warn!(index = contour.index, "degenerate contour, no centroid"),
            }
            annotator.draw_contour(&contour.points);
            metrics.push(m);
        }

        debug!(
            kept = metrics.len(),
            skipped = all_contours.len() - metrics.len(),
            "area filter applied"
        );

        let (outlines, centroids) = annotator.into_images();
        Analysis {
            contours: all_contours,
            metrics,
            outlines,
            centroids,
        }
    }
}

impl Default for DetectionPipeline {
    fn default() -> Self {
        Self {
            params: DetectionParams::default(),
            context: PipelineContext::default(),
        }
    }
}

/// Build the edge extraction stages for `params`
pub fn build_edge_pipeline(params: &DetectionParams) -> Pipeline {
    use crate::detection::steps::*;

    Pipeline::new()
        .add_step(Box::new(GrayscaleStep))
        .add_step(Box::new(BlurStep {
            kernel_size: params.blur_kernel,
            sigma: params.blur_sigma,
        }))
        .add_step(Box::new(EdgeDetectionStep {
            low_threshold: params.low_threshold,
            high_threshold: params.high_threshold,
        }))
}

/// Analyze `img` with `params`, without logging context or debug output.
pub fn analyze(img: &DynamicImage, params: &DetectionParams) -> Result<Analysis> {
    DetectionPipeline::new(params.clone())?.analyze(img)
}
