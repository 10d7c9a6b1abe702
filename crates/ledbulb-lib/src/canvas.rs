//! Off-screen RGBA frame with a small software rasterizer.
//!
//! Ellipse membership uses the normalized radius of each pixel center against
//! the ellipse inscribed in the target rect; gradients interpolate over that
//! same normalized distance. All drawing composites source-over with straight
//! alpha, and pixels outside the frame are clipped (the reflection rect
//! routinely extends past the top-left corner).

use crate::color::Rgba;
use crate::layout::{Rect, Size};
use crate::surface::Surface;

/// Owned straight-alpha RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Ellipse inscribed in a rect: center and semi-axes.
struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    fn inscribed(rect: Rect) -> Self {
        Ellipse {
            cx: rect.x as f32 + rect.width as f32 / 2.0,
            cy: rect.y as f32 + rect.height as f32 / 2.0,
            rx: rect.width as f32 / 2.0,
            ry: rect.height as f32 / 2.0,
        }
    }

    /// Normalized distance of a pixel center from the ellipse center:
    /// 0 at the center, 1 on the rim, > 1 outside.
    fn norm_dist(&self, px: i32, py: i32) -> f32 {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return f32::INFINITY;
        }
        let dx = (px as f32 + 0.5 - self.cx) / self.rx;
        let dy = (py as f32 + 0.5 - self.cy) / self.ry;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Canvas {
    /// Fully transparent frame of the given size.
    pub fn new(size: Size) -> Self {
        Canvas {
            width: size.width,
            height: size.height,
            pixels: vec![0; size.width as usize * size.height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`. Panics if out of bounds (test/debug accessor).
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    fn put(&mut self, x: i32, y: i32, c: Rgba) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i] = c.r;
        self.pixels[i + 1] = c.g;
        self.pixels[i + 2] = c.b;
        self.pixels[i + 3] = c.a;
    }

    /// Source-over blend of `src` onto the pixel at `(x, y)`, clipped.
    fn blend(&mut self, x: i32, y: i32, src: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        if src.a == 0 {
            return;
        }
        if src.a == 255 {
            self.put(x, y, src);
            return;
        }
        let dst = self.pixel(x as u32, y as u32);
        let sa = src.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let oa = sa + da * (1.0 - sa);
        if oa <= 0.0 {
            self.put(x, y, Rgba::new(0, 0, 0, 0));
            return;
        }
        let mix = |s: u8, d: u8| {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
            v.round() as u8
        };
        self.put(
            x,
            y,
            Rgba::new(
                mix(src.r, dst.r),
                mix(src.g, dst.g),
                mix(src.b, dst.b),
                (oa * 255.0).round() as u8,
            ),
        );
    }

    /// Clipped pixel bounds of `rect` as `(x0, y0, x1, y1)`, end-exclusive.
    fn clip(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.x.saturating_add(rect.width as i32).min(self.width as i32);
        let y1 = rect
            .y
            .saturating_add(rect.height as i32)
            .min(self.height as i32);
        (x0, y0, x1, y1)
    }
}

impl Surface for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Rgba) {
        let e = Ellipse::inscribed(rect);
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                if e.norm_dist(x, y) <= 1.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_radial_ellipse(&mut self, rect: Rect, center: Rgba, rim: Rgba) {
        let e = Ellipse::inscribed(rect);
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                let t = e.norm_dist(x, y);
                if t <= 1.0 {
                    self.blend(x, y, center.lerp(rim, t));
                }
            }
        }
    }

    fn stroke_ellipse(&mut self, rect: Rect, color: Rgba) {
        let outer = Ellipse::inscribed(rect);
        // One-pixel ring: inside the outer ellipse but outside the ellipse
        // shrunk by a pixel on each semi-axis.
        let inner = Ellipse {
            rx: (outer.rx - 1.0).max(0.0),
            ry: (outer.ry - 1.0).max(0.0),
            ..Ellipse::inscribed(rect)
        };
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                if outer.norm_dist(x, y) <= 1.0 && inner.norm_dist(x, y) > 1.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }
}
