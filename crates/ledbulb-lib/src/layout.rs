//! Bulb geometry — diameter and layer rectangles from host size and padding.

/// Control size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }
}

/// Four-sided inset supplied by the host layout system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Padding {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Equal inset on all four sides.
    pub const fn uniform(inset: u32) -> Self {
        Padding::new(inset, inset, inset, inset)
    }
}

/// Pixel rectangle. Coordinates are signed: the reflection rect can extend
/// above and left of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Reflection highlight side as a fraction of the bulb diameter.
const REFLECTION_SCALE: f32 = 0.8;
/// Up-left offset of the reflection as a fraction of the bulb diameter.
const REFLECTION_OFFSET: f32 = 0.15;

/// Bulb diameter for a control of `size` with the given padding.
///
/// The lesser of the padded width and height, minus one pixel so the ellipse
/// outline isn't cut off, clamped to a minimum of 1 so degenerate geometry
/// never produces zero-size drawing primitives.
pub fn bulb_diameter(size: Size, padding: &Padding) -> u32 {
    let width = size
        .width
        .saturating_sub(padding.left.saturating_add(padding.right));
    let height = size
        .height
        .saturating_sub(padding.top.saturating_add(padding.bottom));
    width.min(height).saturating_sub(1).max(1)
}

/// Rectangles for the bulb layers, derived once per paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulbGeometry {
    /// Square bounding the bulb, glow, and border ellipses.
    pub bulb: Rect,
    /// Smaller square for the white reflection, shifted up and left.
    pub reflection: Rect,
}

impl BulbGeometry {
    pub fn compute(size: Size, padding: &Padding) -> Self {
        let diameter = bulb_diameter(size, padding);
        let bulb = Rect::new(padding.left as i32, padding.top as i32, diameter, diameter);

        let offset = (diameter as f32 * REFLECTION_OFFSET).round() as i32;
        let side = ((diameter as f32 * REFLECTION_SCALE).round() as u32).max(1);
        let reflection = Rect::new(bulb.x - offset, bulb.y - offset, side, side);

        BulbGeometry { bulb, reflection }
    }
}
