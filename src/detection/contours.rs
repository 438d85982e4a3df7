use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use crate::models::{Contour, Point};

/// Find the outermost contours of a binary edge map.
///
/// Any nonzero pixel counts as foreground. Borders nested inside another
/// border (holes and the shapes within them) are dropped, and each kept
/// boundary is compressed with [`compress_chain`].
pub fn find_external_contours(edges: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| c.parent.is_none() && matches!(c.border_type, BorderType::Outer))
        .enumerate()
        .map(|(index, c)| Contour::new(index, compress_chain(&c.points)))
        .collect()
}

/// Drop the interior points of straight horizontal, vertical and diagonal
/// runs, keeping only the points where the chain changes direction.
///
/// The chain is treated as closed. Chains shorter than three points come
/// back unchanged; a chain whose points all coincide collapses to one.
pub fn compress_chain(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point, b: Point| (b.x - a.x, b.y - a.y);

    let compressed: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            step(prev, cur) != step(cur, next)
        })
        .map(|i| points[i])
        .collect();

    if compressed.is_empty() {
        vec![points[0]]
    } else {
        compressed
    }
}
