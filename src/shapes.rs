//! Filled primitives for the icon canvas
//!
//! Every fill overwrites the destination pixels with the given color rather
//! than blending into them. Coordinates are signed so shapes may hang off
//! the canvas; anything outside is clipped.

use image::{Rgba, RgbaImage};

/// Filled ellipse described by its inclusive bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Filled triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub a: (i32, i32),
    pub b: (i32, i32),
    pub c: (i32, i32),
}

/// Filled axis-aligned rectangle, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Disc {
    pub fn from_bounds(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_center(cx: i32, cy: i32, r: i32) -> Self {
        Self::from_bounds(cx - r, cy - r, cx + r, cy + r)
    }

    /// Whether the pixel at `(x, y)` lies inside the disc
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.row_span(y)
            .map_or(false, |(start, end)| x >= start && x <= end)
    }

    /// Horizontal pixel range covered on row `y`
    fn row_span(&self, y: i32) -> Option<(i32, i32)> {
        if y < self.y0 || y > self.y1 {
            return None;
        }

        let cx = (self.x0 + self.x1) as f32 / 2.0;
        let cy = (self.y0 + self.y1) as f32 / 2.0;
        let rx = (self.x1 - self.x0) as f32 / 2.0;
        let ry = (self.y1 - self.y0) as f32 / 2.0;
        let dy = y as f32 - cy;

        let half = if ry == 0.0 {
            if dy != 0.0 {
                return None;
            }
            rx
        } else {
            let t = dy / ry;
            if t.abs() > 1.0 {
                return None;
            }
            rx * (1.0 - t * t).sqrt()
        };

        let start = (cx - half).ceil() as i32;
        let end = (cx + half).floor() as i32;
        (start <= end).then_some((start, end))
    }
}

impl Triangle {
    pub fn new(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Self {
        Self { a, b, c }
    }

    /// Whether the pixel at `(x, y)` lies on or inside the triangle's edges
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let p = (x, y);
        let e0 = edge(self.a, self.b, p);
        let e1 = edge(self.b, self.c, p);
        let e2 = edge(self.c, self.a, p);

        (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0)
    }
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Signed area test of `p` against the directed edge `a -> b`
fn edge(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> i64 {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let (px, py) = (p.0 as i64, p.1 as i64);
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Clamp the inclusive range `[lo, hi]` to `[0, len)`
fn clip(lo: i32, hi: i32, len: u32) -> Option<(u32, u32)> {
    let lo = lo.max(0);
    let hi = hi.min(len as i32 - 1);
    (lo <= hi).then(|| (lo as u32, hi as u32))
}

pub fn fill_disc(img: &mut RgbaImage, disc: Disc, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    let Some((row_start, row_end)) = clip(disc.y0, disc.y1, height) else {
        return;
    };

    for y in row_start..=row_end {
        let Some((start, end)) = disc.row_span(y as i32) else {
            continue;
        };
        if let Some((x_start, x_end)) = clip(start, end, width) {
            for x in x_start..=x_end {
                img.put_pixel(x, y, color);
            }
        }
    }
}

pub fn fill_triangle(img: &mut RgbaImage, triangle: Triangle, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    let xs = [triangle.a.0, triangle.b.0, triangle.c.0];
    let ys = [triangle.a.1, triangle.b.1, triangle.c.1];

    let (Some(&min_x), Some(&max_x)) = (xs.iter().min(), xs.iter().max()) else {
        return;
    };
    let (Some(&min_y), Some(&max_y)) = (ys.iter().min(), ys.iter().max()) else {
        return;
    };
    let (Some((x_start, x_end)), Some((y_start, y_end))) =
        (clip(min_x, max_x, width), clip(min_y, max_y, height))
    else {
        return;
    };

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            if triangle.contains(x as i32, y as i32) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    let (Some((x_start, x_end)), Some((y_start, y_end))) =
        (clip(rect.x0, rect.x1, width), clip(rect.y0, rect.y1, height))
    else {
        return;
    };

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            img.put_pixel(x, y, color);
        }
    }
}
