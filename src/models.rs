use serde::Serialize;

use crate::detection::geometry;
use crate::error::Result;

/// Integer pixel coordinate on a contour.
pub type Point = imageproc::point::Point<i32>;

/// Boundary of one connected region of the edge map.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Position in extraction order.
    pub index: usize,
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(index: usize, points: Vec<Point>) -> Self {
        Self { index, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unsigned polygon area.
    pub fn area(&self) -> f64 {
        geometry::contour_area(&self.points)
    }

    /// Length of the closed boundary.
    pub fn perimeter(&self) -> f64 {
        geometry::arc_length(&self.points, true)
    }

    pub fn moments(&self) -> Moments {
        geometry::moments(&self.points)
    }

    /// Centroid from first-order moments, or `DegenerateContour`.
    pub fn centroid(&self) -> Result<Centroid> {
        geometry::centroid(&self.moments(), self.index)
    }

    /// Compute every metric at once.
    pub fn metrics(&self) -> ContourMetrics {
        let moments = self.moments();
        ContourMetrics {
            index: self.index,
            area: self.area(),
            perimeter: self.perimeter(),
            centroid: geometry::centroid(&moments, self.index).ok(),
            moments,
        }
    }
}

/// Raw spatial moments of a closed polygon, up to second order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m20: f64,
    pub m11: f64,
    pub m02: f64,
}

impl Moments {
    /// Look a moment up by its conventional name (`"m10"`, ...).
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "m00" => Some(self.m00),
            "m10" => Some(self.m10),
            "m01" => Some(self.m01),
            "m20" => Some(self.m20),
            "m11" => Some(self.m11),
            "m02" => Some(self.m02),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Centroid {
    pub x: i32,
    pub y: i32,
}

/// Geometry reported for a contour that passed the area filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourMetrics {
    pub index: usize,
    pub area: f64,
    pub perimeter: f64,
    #[serde(skip)]
    pub moments: Moments,
    /// `None` when the contour is degenerate.
    pub centroid: Option<Centroid>,
}

impl ContourMetrics {
    pub fn is_degenerate(&self) -> bool {
        self.centroid.is_none()
    }
}
