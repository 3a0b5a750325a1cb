//! PNG rendering for the `dots` binary.
//!
//! The decision grid is drawn with y growing upwards, one `cell_size` square
//! per grid point, the training dots on top and the axes last.

use dot_nn::grid::{Classification, GridCell, GridSpec};
use image::{ImageResult, Rgb, RgbImage};

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

const DOT_RADIUS: i64 = 4;

/// Maps grid coordinates to pixel positions.
struct Canvas {
    spec: GridSpec,
    cell_size: u32,
    width: u32,
    height: u32,
}

impl Canvas {
    fn new(spec: GridSpec, cell_size: u32) -> Canvas {
        let width = spec.xs().count() as u32 * cell_size;
        let height = spec.ys().count() as u32 * cell_size;
        Canvas { spec, cell_size, width, height }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let scale = self.cell_size as f64 / self.spec.step;
        let px = (x - self.spec.x_min) * scale;
        let py = (self.spec.y_max - y) * scale;
        (px.round() as i64, py.round() as i64)
    }

    fn put(&self, img: &mut RgbImage, px: i64, py: i64, colour: Rgb<u8>) {
        if px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height {
            img.put_pixel(px as u32, py as u32, colour);
        }
    }
}

fn cell_colour(cell: &GridCell) -> Rgb<u8> {
    match cell.outputs.as_slice() {
        [first, second, ..] => Rgb([channel(*first), 0, channel(*second)]),
        _ => match cell.classification() {
            Classification(0) => RED,
            _ => BLUE,
        },
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Writes the classification map with the training dots and axes.
pub fn render_grid(
    path: &str,
    spec: GridSpec,
    cell_size: u32,
    cells: &[GridCell],
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> ImageResult<()> {
    let canvas = Canvas::new(spec, cell_size);
    let mut img = RgbImage::new(canvas.width.max(1), canvas.height.max(1));

    for cell in cells {
        let colour = cell_colour(cell);
        // the cell's top-left corner sits one step above its grid point
        let (left, top) = canvas.to_pixel(cell.x, cell.y + spec.step);
        for dy in 0..cell_size as i64 {
            for dx in 0..cell_size as i64 {
                canvas.put(&mut img, left + dx, top + dy, colour);
            }
        }
    }

    for (input, target) in inputs.iter().zip(targets) {
        let colour = if target.first() == Some(&1.0) { BLACK } else { WHITE };
        let (cx, cy) = canvas.to_pixel(input[0], input[1]);
        for dy in -DOT_RADIUS..=DOT_RADIUS {
            for dx in -DOT_RADIUS..=DOT_RADIUS {
                if dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS {
                    canvas.put(&mut img, cx + dx, cy + dy, colour);
                }
            }
        }
    }

    let (origin_x, origin_y) = canvas.to_pixel(0.0, 0.0);
    for x in 0..canvas.width as i64 {
        canvas.put(&mut img, x, origin_y, WHITE);
    }
    for y in 0..canvas.height as i64 {
        canvas.put(&mut img, origin_x, y, WHITE);
    }

    img.save(path)
}

/// One point per sample per epoch: column = epoch, height proportional to
/// the sample's error (clamped to 1), red while that sample is above
/// `allowed_error`, green once at or below it.
fn curve_points(sample_errors: &[Vec<f64>], allowed_error: f64, top: u32) -> Vec<(u32, u32, Rgb<u8>)> {
    sample_errors
        .iter()
        .enumerate()
        .flat_map(|(epoch, samples)| {
            samples.iter().map(move |&error| {
                let colour = if error > allowed_error { RED } else { GREEN };
                let y = (error.clamp(0.0, 1.0) * top as f64).round() as u32;
                (epoch as u32, top - y, colour)
            })
        })
        .collect()
}

/// Writes the training error curve with every sample's error per epoch.
pub fn render_error_curve(path: &str, sample_errors: &[Vec<f64>], allowed_error: f64, height: u32) -> ImageResult<()> {
    let width = sample_errors.len().max(1) as u32;
    let mut img = RgbImage::new(width, height.max(1));
    let top = img.height() - 1;

    for (x, y, colour) in curve_points(sample_errors, allowed_error, top) {
        img.put_pixel(x, y, colour);
    }

    img.save(path)
}
