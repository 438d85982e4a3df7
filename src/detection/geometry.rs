use crate::error::{CoinscanError, Result};
use crate::models::{Centroid, Moments, Point};

/// Unsigned area of the closed polygon through `points` (shoelace formula).
pub fn contour_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    let mut prev = points[points.len() - 1];
    for &p in points {
        twice_area += prev.x as f64 * p.y as f64 - p.x as f64 * prev.y as f64;
        prev = p;
    }
    (twice_area * 0.5).abs()
}

/// Length of the polyline through `points`, including the closing segment
/// when `closed` is set.
pub fn arc_length(points: &[Point], closed: bool) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let segment = |a: Point, b: Point| {
        let dx = (b.x - a.x) as f64;
        let dy = (b.y - a.y) as f64;
        (dx * dx + dy * dy).sqrt()
    };

    let mut length: f64 = points.windows(2).map(|w| segment(w[0], w[1])).sum();
    if closed {
        length += segment(points[points.len() - 1], points[0]);
    }
    length
}

/// Raw moments of the polygon bounded by `points`, via Green's theorem.
///
/// The sign is normalized so that `m00` is never negative, whatever the
/// orientation of the boundary.
pub fn moments(points: &[Point]) -> Moments {
    if points.len() < 3 {
        return Moments::default();
    }

    let (mut a00, mut a10, mut a01) = (0.0, 0.0, 0.0);
    let (mut a20, mut a11, mut a02) = (0.0, 0.0, 0.0);

    let last = points[points.len() - 1];
    let (mut xp, mut yp) = (last.x as f64, last.y as f64);
    for p in points {
        let (x, y) = (p.x as f64, p.y as f64);
        let cross = xp * y - x * yp;
        let sx = xp + x;
        let sy = yp + y;

        a00 += cross;
        a10 += cross * sx;
        a01 += cross * sy;
        a20 += cross * (xp * sx + x * x);
        a11 += cross * (xp * (sy + yp) + x * (sy + y));
        a02 += cross * (yp * sy + y * y);

        xp = x;
        yp = y;
    }

    let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
    Moments {
        m00: sign * a00 / 2.0,
        m10: sign * a10 / 6.0,
        m01: sign * a01 / 6.0,
        m20: sign * a20 / 12.0,
        m11: sign * a11 / 24.0,
        m02: sign * a02 / 12.0,
    }
}

/// Centroid `(m10 / m00, m01 / m00)`, truncated to whole pixels.
///
/// `index` only labels the error for a zero-area contour.
pub fn centroid(moments: &Moments, index: usize) -> Result<Centroid> {
    if moments.m00 == 0.0 || !moments.m00.is_finite() {
        return Err(CoinscanError::DegenerateContour { index });
    }
    Ok(Centroid {
        x: (moments.m10 / moments.m00) as i32,
        y: (moments.m01 / moments.m00) as i32,
    })
}
