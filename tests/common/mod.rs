#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from coinscan for tests
pub use coinscan::{
    Analysis, Centroid, CoinscanError, Contour, ContourMetrics, DetectionParams,
    DetectionPipeline, Moments, Point, analyze,
};
