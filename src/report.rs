use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::detection::Analysis;
use crate::error::Result;
use crate::models::ContourMetrics;

/// Serializable summary of an [`Analysis`].
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub count: usize,
    pub contours: &'a [ContourMetrics],
}

impl<'a> From<&'a Analysis> for Report<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Self {
            count: analysis.count(),
            contours: &analysis.metrics,
        }
    }
}

pub fn count_line(count: usize) -> String {
    format!("I count {} coins in this image", count)
}

/// The three lines printed for a contour. Floats use their shortest
/// round-trip form, so integral values keep a trailing `.0`.
pub fn metric_lines(metrics: &ContourMetrics) -> [String; 3] {
    let center = match metrics.centroid {
        Some(c) => format!("the center point {} {}", c.x, c.y),
        None => "the center point degenerate".to_string(),
    };
    [
        format!("Area {:?}", metrics.area),
        format!("perimeter {:?}", metrics.perimeter),
        center,
    ]
}

/// Write the count line followed by the metric lines of each contour.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> std::io::Result<()> {
    writeln!(out, "{}", count_line(analysis.count()))?;
    for metrics in &analysis.metrics {
        for line in metric_lines(metrics) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// Write the report as pretty JSON to `path`.
pub fn write_json(path: impl AsRef<Path>, analysis: &Analysis) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &Report::from(analysis)).map_err(std::io::Error::from)?;
    Ok(())
}
