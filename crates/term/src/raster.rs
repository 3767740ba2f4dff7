//! PixelCanvas: rasterizes core drawing primitives for the terminal.
//!
//! World coordinates are scaled onto a pixel grid where every terminal cell
//! holds two pixels stacked vertically (an upper-half block glyph with the top
//! pixel as foreground and the bottom pixel as background). Shapes are filled
//! by sampling pixel centres through the inverse of the current transform, so
//! rotated sprites rasterize correctly.
//!
//! All buffers are reused across frames; steady-state drawing does not allocate.

use crate::core::Canvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Glyph used to show two pixels in one cell.
pub const HALF_BLOCK: char = '▀';

/// 2D affine transform: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Affine {
    const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn rotation_about(radians: f64, cx: f64, cy: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Affine {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: cx - cos * cx + sin * cy,
            f: cy - sin * cx - cos * cy,
        }
    }

    /// `self ∘ rhs`: apply `rhs` first, then `self`.
    fn compose(&self, rhs: &Affine) -> Affine {
        Affine {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    fn invert(&self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Affine {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Pen {
    color: Rgb,
    stroke_width: f64,
    transform: Affine,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            stroke_width: 1.0,
            transform: Affine::IDENTITY,
        }
    }
}

/// Axis-aligned rectangle containment (half-open).
fn in_rect(px: f64, py: f64, x: f64, y: f64, w: f64, h: f64) -> bool {
    w > 0.0 && h > 0.0 && px >= x && px < x + w && py >= y && py < y + h
}

/// Containment in the ellipse centred at `(cx, cy)` with radii `rx`, `ry`.
fn in_ellipse(px: f64, py: f64, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = (px - cx) / rx;
    let ny = (py - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Even-odd polygon containment.
fn in_polygon(px: f64, py: f64, points: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn distance_to_segment(px: f64, py: f64, (ax, ay): (f64, f64), (bx, by): (f64, f64)) -> f64 {
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

fn near_outline(px: f64, py: f64, points: &[(f64, f64)], half_width: f64) -> bool {
    let n = points.len();
    (0..n).any(|i| distance_to_segment(px, py, points[i], points[(i + 1) % n]) <= half_width)
}

fn bbox(points: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
    )
}

/// Pixel-grid implementation of [`Canvas`].
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    /// Pixels per world unit.
    scale: f64,
    pixels: Vec<Rgb>,
    pen: Pen,
    stack: Vec<Pen>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
            pen: Pen::default(),
            stack: Vec::with_capacity(8),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Resize and rescale, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16, scale: f64) {
        self.width = width;
        self.height = height;
        self.scale = scale;
        self.pixels
            .resize(width as usize * height as usize, Rgb::BLACK);
    }

    /// Fill every pixel and reset the pen and transform stack.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.pen = Pen::default();
        self.stack.clear();
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Copy the pixels into `fb` with the top-left pixel at cell `(x0, y0)`.
    ///
    /// A trailing odd pixel row is paired with `fill` below it.
    pub fn blit_into(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, fill: Rgb) {
        let rows = self.height.div_ceil(2);
        for row in 0..rows {
            for col in 0..self.width {
                let top = self.get(col, row * 2).unwrap_or(fill);
                let bottom = self.get(col, row * 2 + 1).unwrap_or(fill);
                fb.put_char(
                    x0.saturating_add(col),
                    y0.saturating_add(row),
                    HALF_BLOCK,
                    CellStyle::new(top, bottom),
                );
            }
        }
    }

    /// Half stroke width in world units; never thinner than one pixel.
    fn half_stroke(&self) -> f64 {
        (self.pen.stroke_width / 2.0).max(0.75 / self.scale)
    }

    /// Paint every pixel whose centre, mapped back into local drawing
    /// coordinates, satisfies `inside`. `local` bounds the shape.
    fn paint(&mut self, local: (f64, f64, f64, f64), inside: impl Fn(f64, f64) -> bool) {
        if self.width == 0 || self.height == 0 || self.scale <= 0.0 {
            return;
        }
        let Some(inverse) = self.pen.transform.invert() else {
            return;
        };

        let (lx0, ly0, lx1, ly1) = local;
        let corners = [(lx0, ly0), (lx1, ly0), (lx1, ly1), (lx0, ly1)];
        let (mut x0, mut y0, mut x1, mut y1) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for (cx, cy) in corners {
            let (wx, wy) = self.pen.transform.apply(cx, cy);
            x0 = x0.min(wx);
            y0 = y0.min(wy);
            x1 = x1.max(wx);
            y1 = y1.max(wy);
        }

        let px0 = (x0 * self.scale).floor().max(0.0) as usize;
        let py0 = (y0 * self.scale).floor().max(0.0) as usize;
        let px1 = ((x1 * self.scale).ceil().max(0.0) as usize).min(self.width as usize);
        let py1 = ((y1 * self.scale).ceil().max(0.0) as usize).min(self.height as usize);

        let color = self.pen.color;
        let stride = self.width as usize;
        for py in py0..py1 {
            for px in px0..px1 {
                let wx = (px as f64 + 0.5) / self.scale;
                let wy = (py as f64 + 0.5) / self.scale;
                let (lx, ly) = inverse.apply(wx, wy);
                if inside(lx, ly) {
                    self.pixels[py * stride + px] = color;
                }
            }
        }
    }
}

impl Canvas for PixelCanvas {
    fn set_color(&mut self, color: Rgb) {
        self.pen.color = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.pen.stroke_width = width;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.paint((x, y, x + w, y + h), |px, py| in_rect(px, py, x, y, w, h));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let hw = self.half_stroke();
        self.paint((x - hw, y - hw, x + w + hw, y + h + hw), |px, py| {
            in_rect(px, py, x - hw, y - hw, w + 2.0 * hw, h + 2.0 * hw)
                && !in_rect(px, py, x + hw, y + hw, w - 2.0 * hw, h - 2.0 * hw)
        });
    }

    fn fill_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let (cx, cy, rx, ry) = (x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0);
        self.paint((x, y, x + w, y + h), |px, py| {
            in_ellipse(px, py, cx, cy, rx, ry)
        });
    }

    fn stroke_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let hw = self.half_stroke();
        let (cx, cy, rx, ry) = (x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0);
        self.paint((x - hw, y - hw, x + w + hw, y + h + hw), |px, py| {
            in_ellipse(px, py, cx, cy, rx + hw, ry + hw)
                && !in_ellipse(px, py, cx, cy, rx - hw, ry - hw)
        });
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)]) {
        if points.len() < 3 {
            return;
        }
        self.paint(bbox(points), |px, py| in_polygon(px, py, points));
    }

    fn stroke_polygon(&mut self, points: &[(f64, f64)]) {
        if points.len() < 2 {
            return;
        }
        let hw = self.half_stroke();
        let (x0, y0, x1, y1) = bbox(points);
        self.paint((x0 - hw, y0 - hw, x1 + hw, y1 + hw), |px, py| {
            near_outline(px, py, points, hw)
        });
    }

    fn save(&mut self) {
        self.stack.push(self.pen);
    }

    fn restore(&mut self) {
        if let Some(pen) = self.stack.pop() {
            self.pen = pen;
        }
    }

    fn rotate_about(&mut self, radians: f64, cx: f64, cy: f64) {
        self.pen.transform = self
            .pen
            .transform
            .compose(&Affine::rotation_about(radians, cx, cy));
    }
}
