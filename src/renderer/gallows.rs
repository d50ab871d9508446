//! Hangman stage images.
//!
//! Stage `n` shows the drawing after `n` wrong guesses. Images are read
//! from `hangman0.png` .. `hangman6.png` when all seven are present and
//! decodable; otherwise placeholder drawings are generated.

use std::path::Path;

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::core::error::{HangmanError, Result};
use crate::game::MAX_WRONG_GUESSES;

/// One image per wrong-guess count, 0 through 6.
pub const STAGE_COUNT: usize = MAX_WRONG_GUESSES as usize + 1;

/// Size of a generated stage image.
pub const IMAGE_WIDTH: u32 = 200;
pub const IMAGE_HEIGHT: u32 = 250;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Stroke width of the figure.
const LINE_WIDTH: f32 = 2.0;

/// Where the stage images came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallowsSource {
    Disk,
    Generated,
}

/// The full set of stage images.
pub struct GallowsImages {
    stages: Vec<RgbaImage>,
    source: GallowsSource,
}

impl GallowsImages {
    /// Load images from `dir`, generating placeholders if any is unusable.
    pub fn load_or_generate(dir: &Path) -> Self {
        match load_from_dir(dir) {
            Ok(stages) => {
                tracing::info!("Loaded hangman images from {}", dir.display());
                Self {
                    stages,
                    source: GallowsSource::Disk,
                }
            }
            Err(HangmanError::MissingAsset(path)) if path == dir => {
                tracing::info!("No image folder at {}, drawing placeholders", dir.display());
                Self::generated()
            }
            Err(e) => {
                tracing::warn!("Error loading images: {e}; drawing placeholders");
                Self::generated()
            }
        }
    }

    /// Procedurally drawn placeholders.
    pub fn generated() -> Self {
        Self {
            stages: generate_stages(),
            source: GallowsSource::Generated,
        }
    }

    pub fn source(&self) -> GallowsSource {
        self.source
    }

    pub fn stages(&self) -> &[RgbaImage] {
        &self.stages
    }

    /// Image for `wrong_guesses`, clamped to the final stage.
    pub fn stage(&self, wrong_guesses: u8) -> &RgbaImage {
        let index = (wrong_guesses as usize).min(self.stages.len() - 1);
        &self.stages[index]
    }
}

/// Read all seven stage images from `dir`.
pub fn load_from_dir(dir: &Path) -> Result<Vec<RgbaImage>> {
    if !dir.is_dir() {
        return Err(HangmanError::MissingAsset(dir.to_path_buf()));
    }

    (0..STAGE_COUNT)
        .map(|stage| {
            let path = dir.join(format!("hangman{stage}.png"));
            if !path.exists() {
                return Err(HangmanError::MissingAsset(path));
            }
            let img = image::open(&path).map_err(|source| HangmanError::ImageError {
                path: path.clone(),
                source,
            })?;
            Ok(img.to_rgba8())
        })
        .collect()
}

/// Draw the seven stages: gallows first, then head, body, arms and legs.
pub fn generate_stages() -> Vec<RgbaImage> {
    (0..STAGE_COUNT).map(draw_stage).collect()
}

fn draw_stage(stage: usize) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, WHITE);

    // Gallows
    fill_rect(&mut img, 50, 30, 100, 10);
    fill_rect(&mut img, 50, 30, 10, 200);
    fill_rect(&mut img, 20, 230, 100, 10);

    let limbs = [
        (Vec2::new(100.0, 80.0), Vec2::new(100.0, 140.0)),
        (Vec2::new(100.0, 100.0), Vec2::new(70.0, 120.0)),
        (Vec2::new(100.0, 100.0), Vec2::new(130.0, 120.0)),
        (Vec2::new(100.0, 140.0), Vec2::new(70.0, 180.0)),
        (Vec2::new(100.0, 140.0), Vec2::new(130.0, 180.0)),
    ];

    if stage >= 1 {
        stroke_circle(&mut img, Vec2::new(100.0, 60.0), 20.0);
    }
    for &(from, to) in limbs.iter().take(stage.saturating_sub(1)) {
        stroke_line(&mut img, from, to);
    }

    img
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32) {
    let x_end = (x + width).min(img.width());
    let y_end = (y + height).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, BLACK);
        }
    }
}

/// Paint every pixel whose centre satisfies `inside`, within the given box.
fn paint_where(img: &mut RgbaImage, min: Vec2, max: Vec2, inside: impl Fn(Vec2) -> bool) {
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil() as u32).min(img.width().saturating_sub(1));
    let y1 = (max.y.ceil() as u32).min(img.height().saturating_sub(1));
    for py in y0..=y1 {
        for px in x0..=x1 {
            if inside(Vec2::new(px as f32, py as f32)) {
                img.put_pixel(px, py, BLACK);
            }
        }
    }
}

fn stroke_circle(img: &mut RgbaImage, center: Vec2, radius: f32) {
    let reach = Vec2::splat(radius);
    paint_where(img, center - reach, center + reach, |p| {
        let d = p.distance(center);
        d <= radius && d > radius - LINE_WIDTH
    });
}

fn stroke_line(img: &mut RgbaImage, from: Vec2, to: Vec2) {
    let half = LINE_WIDTH / 2.0;
    let pad = Vec2::splat(half);
    paint_where(img, from.min(to) - pad, from.max(to) + pad, |p| {
        distance_to_segment(p, from, to) <= half
    });
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
