use coinscan::Point;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use tempfile::NamedTempFile;

pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Uniform black image.
pub fn blank_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, BACKGROUND))
}

/// White discs on black, one per `(cx, cy, radius)`.
pub fn image_with_discs(width: u32, height: u32, discs: &[(i32, i32, i32)]) -> DynamicImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for &(cx, cy, r) in discs {
        draw_filled_circle_mut(&mut img, (cx, cy), r, FOREGROUND);
    }
    DynamicImage::ImageRgb8(img)
}

/// Discs of gray `level` on black.
pub fn image_with_gray_discs(
    width: u32,
    height: u32,
    discs: &[(i32, i32, i32)],
    level: u8,
) -> DynamicImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for &(cx, cy, r) in discs {
        draw_filled_circle_mut(&mut img, (cx, cy), r, Rgb([level, level, level]));
    }
    DynamicImage::ImageRgb8(img)
}

/// White squares on black, one per `(x, y, side)` with `(x, y)` the top-left corner.
pub fn image_with_squares(width: u32, height: u32, squares: &[(i32, i32, u32)]) -> DynamicImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for &(x, y, side) in squares {
        draw_filled_rect_mut(&mut img, Rect::at(x, y).of_size(side, side), FOREGROUND);
    }
    DynamicImage::ImageRgb8(img)
}

/// Corners of an axis-aligned rectangle, clockwise in image coordinates.
pub fn rect_points(x: i32, y: i32, w: i32, h: i32) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ]
}

/// Every pixel on the border of a rectangle, as a border follower would
/// report it.
pub fn rect_chain(x: i32, y: i32, w: i32, h: i32) -> Vec<Point> {
    let mut points = Vec::new();
    for i in x..x + w {
        points.push(Point::new(i, y));
    }
    for j in y..y + h {
        points.push(Point::new(x + w, j));
    }
    for i in (x + 1..=x + w).rev() {
        points.push(Point::new(i, y + h));
    }
    for j in (y + 1..=y + h).rev() {
        points.push(Point::new(x, j));
    }
    points
}

/// Save `img` as a PNG in a temp file that is removed on drop.
pub fn save_temp_png(img: &DynamicImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let rel = ((actual - expected) / expected).abs();
    assert!(
        rel <= tolerance,
        "expected {expected} within {:.0}%, got {actual}",
        tolerance * 100.0
    );
}
