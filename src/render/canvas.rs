//! A small raster canvas in stadium coordinates.
//!
//! Stadium space has its origin at the centre of the image with y pointing
//! down, matching how stadiums are authored. Every primitive is drawn by
//! testing pixel centres inside the shape's bounding box and blending the
//! colour over what is already there.

use image::{Rgba, RgbaImage};

use crate::error::{HbsError, Result};
use crate::types::{Colour, Point};

/// Largest preview side, in pixels.
pub const MAX_SIDE: u32 = 8_192;

/// An image plus the transform from stadium space to pixels.
pub struct Canvas {
    image: RgbaImage,
    half_width: f64,
    half_height: f64,
    scale: f64,
}

impl Canvas {
    /// A canvas covering `[-half_width, half_width] x [-half_height, half_height]`.
    ///
    /// Fails with `PreviewTooLarge` when either side would exceed [`MAX_SIDE`]
    /// pixels at this scale.
    pub fn new(half_width: f64, half_height: f64, scale: u32) -> Result<Self> {
        let scale = scale.max(1);
        let side = |half: f64| {
            let pixels = (half * 2.0).ceil().max(1.0) * scale as f64;
            (pixels <= MAX_SIDE as f64).then_some(pixels as u32)
        };

        let (Some(width), Some(height)) = (side(half_width), side(half_height)) else {
            return Err(HbsError::PreviewTooLarge {
                width: half_width * 2.0,
                height: half_height * 2.0,
                scale,
                max: MAX_SIDE,
            });
        };

        Ok(Self {
            image: RgbaImage::new(width, height),
            half_width,
            half_height,
            scale: scale as f64,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Map a stadium point to pixel space.
    pub fn to_pixel(&self, p: Point) -> Point {
        Point::new(
            (p.x + self.half_width) * self.scale,
            (p.y + self.half_height) * self.scale,
        )
    }

    /// Fill the whole canvas, replacing what is there.
    pub fn fill(&mut self, colour: Colour) {
        let rgba = Rgba(colour.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Blend one pixel. Out-of-bounds coordinates are ignored.
    fn blend(&mut self, x: i64, y: i64, colour: Colour) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let [r, g, b, a] = colour.to_rgba();
        let alpha = a as f64 / 255.0;
        let inv = 1.0 - alpha;

        let mix = |src: u8, dst: u8| (src as f64 * alpha + dst as f64 * inv).round() as u8;
        dst.0 = [
            mix(r, dst.0[0]),
            mix(g, dst.0[1]),
            mix(b, dst.0[2]),
            (a as f64 + dst.0[3] as f64 * inv).round().min(255.0) as u8,
        ];
    }

    /// Visit pixel centres inside a pixel-space box.
    fn for_box(&mut self, min: Point, max: Point, mut inside: impl FnMut(Point) -> bool, colour: Colour) {
        let x0 = min.x.floor() as i64;
        let y0 = min.y.floor() as i64;
        let x1 = max.x.ceil() as i64;
        let y1 = max.y.ceil() as i64;

        for y in y0.max(0)..=y1.min(self.image.height() as i64) {
            for x in x0.max(0)..=x1.min(self.image.width() as i64) {
                if inside(Point::new(x as f64 + 0.5, y as f64 + 0.5)) {
                    self.blend(x, y, colour);
                }
            }
        }
    }

    /// Fill an axis-aligned rectangle given in stadium space.
    pub fn fill_rect(&mut self, min: Point, max: Point, colour: Colour) {
        let (a, b) = (self.to_pixel(min), self.to_pixel(max));
        self.for_box(a, b, |p| p.x >= a.x && p.x <= b.x && p.y >= a.y && p.y <= b.y, colour);
    }

    /// Fill a disc given in stadium space.
    pub fn fill_circle(&mut self, centre: Point, radius: f64, colour: Colour) {
        let c = self.to_pixel(centre);
        let r = radius * self.scale;
        self.for_box(
            Point::new(c.x - r, c.y - r),
            Point::new(c.x + r, c.y + r),
            |p| p.distance(c) <= r,
            colour,
        );
    }

    /// Stroke a circle outline of `width` stadium units.
    pub fn stroke_circle(&mut self, centre: Point, radius: f64, width: f64, colour: Colour) {
        let c = self.to_pixel(centre);
        let r = radius * self.scale;
        let half = width * self.scale / 2.0;
        let outer = r + half;
        self.for_box(
            Point::new(c.x - outer, c.y - outer),
            Point::new(c.x + outer, c.y + outer),
            |p| (p.distance(c) - r).abs() <= half,
            colour,
        );
    }

    /// Stroke a straight line of `width` stadium units.
    pub fn line(&mut self, from: Point, to: Point, width: f64, colour: Colour) {
        let a = self.to_pixel(from);
        let b = self.to_pixel(to);
        let half = (width * self.scale / 2.0).max(0.5);

        self.for_box(
            Point::new(a.x.min(b.x) - half, a.y.min(b.y) - half),
            Point::new(a.x.max(b.x) + half, a.y.max(b.y) + half),
            |p| distance_to_segment(p, a, b) <= half,
            colour,
        );
    }

    /// Stroke the arc of `radius` around `centre` from `start` to `end`
    /// radians, sweeping in the direction of increasing angle.
    pub fn arc(&mut self, centre: Point, radius: f64, start: f64, end: f64, width: f64, colour: Colour) {
        let c = self.to_pixel(centre);
        let r = radius * self.scale;
        let half = (width * self.scale / 2.0).max(0.5);
        let span = angular_sweep(start, end);
        let outer = r + half;

        self.for_box(
            Point::new(c.x - outer, c.y - outer),
            Point::new(c.x + outer, c.y + outer),
            |p| {
                if (p.distance(c) - r).abs() > half {
                    return false;
                }
                let angle = (p.y - c.y).atan2(p.x - c.x);
                angular_sweep(start, angle) <= span
            },
            colour,
        );
    }
}

/// Positive angular distance travelled from `start` to `end`.
fn angular_sweep(start: f64, end: f64) -> f64 {
    (end - start).rem_euclid(std::f64::consts::TAU)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}
