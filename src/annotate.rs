use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::error::{CoinscanError, Result};
use crate::models::{Centroid, Point};

pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const OUTLINE_THICKNESS: i32 = 2;
pub const CENTROID_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const CENTROID_RADIUS: i32 = 5;

/// The two annotation layers: contour outlines and centroid markers.
///
/// Both start as copies of the input and collect drawings across every
/// contour handed to them; nothing is cleared in between.
#[derive(Debug, Clone)]
pub struct Annotator {
    outlines: RgbImage,
    centroids: RgbImage,
}

impl Annotator {
    pub fn new(original: &RgbImage) -> Self {
        Self {
            outlines: original.clone(),
            centroids: original.clone(),
        }
    }

    pub fn draw_contour(&mut self, points: &[Point]) {
        draw_contour(&mut self.outlines, points, OUTLINE_COLOR, OUTLINE_THICKNESS);
    }

    pub fn draw_centroid(&mut self, centroid: Centroid) {
        draw_filled_circle_mut(
            &mut self.centroids,
            (centroid.x, centroid.y),
            CENTROID_RADIUS,
            CENTROID_COLOR,
        );
    }

    pub fn outlines(&self) -> &RgbImage {
        &self.outlines
    }

    pub fn centroids(&self) -> &RgbImage {
        &self.centroids
    }

    pub fn into_images(self) -> (RgbImage, RgbImage) {
        (self.outlines, self.centroids)
    }
}

/// Draw the closed polyline through `points`, `thickness` pixels wide,
/// centred on the path (offsets `-thickness / 2 ..`).
pub fn draw_contour(img: &mut RgbImage, points: &[Point], color: Rgb<u8>, thickness: i32) {
    let thickness = thickness.max(1);
    let first = -(thickness / 2);
    let n = points.len();
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        for offset in first..first + thickness {
            let offset = offset as f32;
            let (x1, y1) = (p1.x as f32, p1.y as f32);
            let (x2, y2) = (p2.x as f32, p2.y as f32);
            draw_line_segment_mut(img, (x1 + offset, y1), (x2 + offset, y2), color);
            draw_line_segment_mut(img, (x1, y1 + offset), (x2, y2 + offset), color);
        }
    }
}

/// Place `left` and `right` side by side.
pub fn hstack(left: &RgbImage, right: &RgbImage) -> Result<RgbImage> {
    if left.height() != right.height() {
        return Err(CoinscanError::DimensionMismatch {
            left: left.height(),
            right: right.height(),
        });
    }

    let mut canvas = RgbImage::new(left.width() + right.width(), left.height());
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, left.width() as i64, 0);
    Ok(canvas)
}
