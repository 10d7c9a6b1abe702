//! Drawing-surface abstraction — the primitives the bulb renderer needs.

use crate::color::Rgba;
use crate::layout::{Rect, Size};

/// Surface the indicator draws on.
///
/// Implementations composite each call over whatever is already on the
/// surface via straight alpha. [`Canvas`](crate::canvas::Canvas) is the
/// software implementation; hosts with their own 2D backend can implement
/// this directly.
pub trait Surface {
    /// Drawable size in pixels.
    fn size(&self) -> Size;

    /// Fill the ellipse inscribed in `rect` with a solid color.
    fn fill_ellipse(&mut self, rect: Rect, color: Rgba);

    /// Fill the ellipse inscribed in `rect` with a radial gradient from
    /// `center` at the midpoint to `rim` at the ellipse edge.
    fn fill_radial_ellipse(&mut self, rect: Rect, center: Rgba, rim: Rgba);

    /// Draw a one-pixel outline of the ellipse inscribed in `rect`.
    fn stroke_ellipse(&mut self, rect: Rect, color: Rgba);
}

pub mod mock {
    //! Recording surface for tests — captures every primitive call in order.

    use super::*;

    /// One recorded drawing call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DrawOp {
        FillEllipse { rect: Rect, color: Rgba },
        FillRadialEllipse { rect: Rect, center: Rgba, rim: Rgba },
        StrokeEllipse { rect: Rect, color: Rgba },
    }

    /// Surface that records calls instead of rasterizing.
    pub struct MockSurface {
        size: Size,
        pub ops: Vec<DrawOp>,
    }

    impl MockSurface {
        pub fn new(size: Size) -> Self {
            MockSurface {
                size,
                ops: Vec::new(),
            }
        }
    }

    impl Surface for MockSurface {
        fn size(&self) -> Size {
            self.size
        }

        fn fill_ellipse(&mut self, rect: Rect, color: Rgba) {
            self.ops.push(DrawOp::FillEllipse { rect, color });
        }

        fn fill_radial_ellipse(&mut self, rect: Rect, center: Rgba, rim: Rgba) {
            self.ops.push(DrawOp::FillRadialEllipse { rect, center, rim });
        }

        fn stroke_ellipse(&mut self, rect: Rect, color: Rgba) {
            self.ops.push(DrawOp::StrokeEllipse { rect, color });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{DrawOp, MockSurface};
    use super::*;

    #[test]
    fn mock_records_ops_in_order() {
        let mut s = MockSurface::new(Size::new(10, 10));
        let r = Rect::new(0, 0, 9, 9);
        let red = Rgba::opaque(255, 0, 0);
        s.fill_ellipse(r, red);
        s.stroke_ellipse(r, red);
        assert_eq!(
            s.ops,
            vec![
                DrawOp::FillEllipse { rect: r, color: red },
                DrawOp::StrokeEllipse { rect: r, color: red },
            ]
        );
    }

    #[test]
    fn mock_reports_size() {
        let s = MockSurface::new(Size::new(3, 7));
        assert_eq!(s.size(), Size::new(3, 7));
    }
}
