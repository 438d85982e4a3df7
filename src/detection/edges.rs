use image::GrayImage;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

const TAN_22_5: f32 = 0.414_213_57;
const TAN_67_5: f32 = 2.414_213_6;

/// Gradient orientation quantized to the neighbour pair compared during
/// non-maximum suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Compare left and right.
    Horizontal,
    /// Compare above and below.
    Vertical,
    /// Compare up-left and down-right.
    Diagonal,
    /// Compare up-right and down-left.
    AntiDiagonal,
}

/// Per-pixel L1 Sobel magnitude `|gx| + |gy|` and quantized direction,
/// row-major.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub width: usize,
    pub height: usize,
    pub magnitude: Vec<f32>,
    pub direction: Vec<GradientDirection>,
}

impl Gradients {
    fn magnitude_at(&self, x: isize, y: isize) -> f32 {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return 0.0;
        }
        self.magnitude[y as usize * self.width + x as usize]
    }
}

/// 3x3 Sobel gradients of `img`.
pub fn gradients(img: &GrayImage) -> Gradients {
    let gx = horizontal_sobel(img);
    let gy = vertical_sobel(img);
    let (width, height) = (img.width() as usize, img.height() as usize);

    let mut magnitude = Vec::with_capacity(width * height);
    let mut direction = Vec::with_capacity(width * height);

    for (dx, dy) in gx.pixels().zip(gy.pixels()) {
        let dx = dx[0] as f32;
        let dy = dy[0] as f32;
        let (ax, ay) = (dx.abs(), dy.abs());

        magnitude.push(ax + ay);
        direction.push(if ay <= ax * TAN_22_5 {
            GradientDirection::Horizontal
        } else if ay > ax * TAN_67_5 {
            GradientDirection::Vertical
        } else if (dx > 0.0) == (dy > 0.0) {
            GradientDirection::Diagonal
        } else {
            GradientDirection::AntiDiagonal
        });
    }

    Gradients {
        width,
        height,
        magnitude,
        direction,
    }
}

/// Keep only magnitudes that peak across the gradient; everything at or
/// below `low` is cleared.
///
/// Ties along an axis go to the first pixel (left or upper), so a step
/// edge yields a one-pixel line.
pub fn non_max_suppression(grads: &Gradients, low: f32) -> Vec<f32> {
    let mut out = vec![0.0f32; grads.width * grads.height];

    for y in 0..grads.height {
        for x in 0..grads.width {
            let idx = y * grads.width + x;
            let m = grads.magnitude[idx];
            if m <= low {
                continue;
            }

            let (x, y) = (x as isize, y as isize);
            let keep = match grads.direction[idx] {
                GradientDirection::Horizontal => {
                    m > grads.magnitude_at(x - 1, y) && m >= grads.magnitude_at(x + 1, y)
                }
                GradientDirection::Vertical => {
                    m > grads.magnitude_at(x, y - 1) && m >= grads.magnitude_at(x, y + 1)
                }
                GradientDirection::Diagonal => {
                    m > grads.magnitude_at(x - 1, y - 1) && m > grads.magnitude_at(x + 1, y + 1)
                }
                GradientDirection::AntiDiagonal => {
                    m > grads.magnitude_at(x + 1, y - 1) && m > grads.magnitude_at(x - 1, y + 1)
                }
            };

            if keep {
                out[idx] = m;
            }
        }
    }

    out
}

/// Edge map from suppressed magnitudes: pixels above `high` seed edges,
/// which grow through 8-connected pixels above `low`.
pub fn hysteresis(nms: &[f32], width: usize, height: usize, low: f32, high: f32) -> GrayImage {
    let mut edges = GrayImage::new(width as u32, height as u32);
    let mut stack = Vec::new();

    for (idx, &m) in nms.iter().enumerate() {
        if m > high {
            stack.push((idx % width, idx / width));
        }
    }

    while let Some((x, y)) = stack.pop() {
        let px = edges.get_pixel_mut(x as u32, y as u32);
        if px[0] != 0 {
            continue;
        }
        px[0] = 255;

        for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                if nms[ny * width + nx] > low && edges.get_pixel(nx as u32, ny as u32)[0] == 0 {
                    stack.push((nx, ny));
                }
            }
        }
    }

    edges
}

/// Canny edge detector on an already smoothed image.
///
/// Thresholds apply to the L1 Sobel magnitude. No smoothing is done here;
/// blur the input first.
pub fn canny(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let grads = gradients(img);
    let nms = non_max_suppression(&grads, low_threshold);
    hysteresis(&nms, grads.width, grads.height, low_threshold, high_threshold)
}
