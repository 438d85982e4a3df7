mod common;

use coinscan::annotate::{
    Annotator, CENTROID_COLOR, CENTROID_RADIUS, OUTLINE_COLOR, draw_contour, hstack,
};
use common::*;
use image::{Rgb, RgbImage};

#[test]
fn test_accumulators_are_independent() {
    let base = RgbImage::from_pixel(50, 50, Rgb([10, 10, 10]));
    let mut annotator = Annotator::new(&base);

    annotator.draw_contour(&rect_points(5, 5, 10, 10));
    annotator.draw_centroid(Centroid { x: 30, y: 30 });

    assert_eq!(*annotator.outlines().get_pixel(5, 5), OUTLINE_COLOR);
    assert_eq!(*annotator.outlines().get_pixel(30, 30), Rgb([10, 10, 10]));
    assert_eq!(*annotator.centroids().get_pixel(30, 30), CENTROID_COLOR);
    assert_eq!(*annotator.centroids().get_pixel(5, 5), Rgb([10, 10, 10]));
}

#[test]
fn test_drawings_accumulate() {
    let base = RgbImage::new(60, 60);
    let mut annotator = Annotator::new(&base);
    annotator.draw_centroid(Centroid { x: 10, y: 10 });
    annotator.draw_centroid(Centroid { x: 40, y: 40 });
    annotator.draw_contour(&rect_points(2, 2, 5, 5));
    annotator.draw_contour(&rect_points(30, 30, 5, 5));

    let (outlines, centroids) = annotator.into_images();
    assert_eq!(*centroids.get_pixel(10, 10), CENTROID_COLOR);
    assert_eq!(*centroids.get_pixel(40, 40), CENTROID_COLOR);
    assert_eq!(*outlines.get_pixel(2, 2), OUTLINE_COLOR);
    assert_eq!(*outlines.get_pixel(30, 30), OUTLINE_COLOR);
}

#[test]
fn test_centroid_marker_radius() {
    let mut annotator = Annotator::new(&RgbImage::new(40, 40));
    annotator.draw_centroid(Centroid { x: 20, y: 20 });
    let centroids = annotator.centroids();

    let r = CENTROID_RADIUS as u32;
    assert_eq!(*centroids.get_pixel(20 + r, 20), CENTROID_COLOR);
    assert_eq!(*centroids.get_pixel(20, 20 - r), CENTROID_COLOR);
    assert_eq!(*centroids.get_pixel(20 + r + 2, 20), Rgb([0, 0, 0]));
}

#[test]
fn test_outline_thickness() {
    let mut img = RgbImage::new(40, 40);
    draw_contour(&mut img, &rect_points(10, 10, 20, 20), OUTLINE_COLOR, 2);

    // Horizontal edge is two pixels tall, vertical edge two pixels wide,
    // both straddling the path
    assert_eq!(*img.get_pixel(20, 9), OUTLINE_COLOR);
    assert_eq!(*img.get_pixel(20, 10), OUTLINE_COLOR);
    assert_eq!(*img.get_pixel(20, 11), Rgb([0, 0, 0]));
    assert_eq!(*img.get_pixel(9, 20), OUTLINE_COLOR);
    assert_eq!(*img.get_pixel(10, 20), OUTLINE_COLOR);
    assert_eq!(*img.get_pixel(11, 20), Rgb([0, 0, 0]));
    // Interior untouched
    assert_eq!(*img.get_pixel(20, 20), Rgb([0, 0, 0]));
}

#[test]
fn test_hstack() {
    let left = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
    let right = RgbImage::from_pixel(5, 2, Rgb([4, 5, 6]));
    let stacked = hstack(&left, &right).unwrap();

    assert_eq!(stacked.dimensions(), (8, 2));
    assert_eq!(*stacked.get_pixel(2, 1), Rgb([1, 2, 3]));
    assert_eq!(*stacked.get_pixel(3, 0), Rgb([4, 5, 6]));
    assert_eq!(*stacked.get_pixel(7, 1), Rgb([4, 5, 6]));
}

#[test]
fn test_hstack_height_mismatch() {
    let left = RgbImage::new(3, 2);
    let right = RgbImage::new(3, 4);
    assert!(matches!(
        hstack(&left, &right),
        Err(CoinscanError::DimensionMismatch { left: 2, right: 4 })
    ));
}
