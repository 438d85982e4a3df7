pub mod annotate;
pub mod config;
pub mod detection;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod report;

pub use config::DetectionParams;
pub use detection::{Analysis, DetectionPipeline, analyze};
pub use error::{CoinscanError, Result};
pub use loader::load_image;
pub use models::{Centroid, Contour, ContourMetrics, Moments, Point};
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, PipelineStep};

#[cfg(feature = "gui")]
pub mod gui;
