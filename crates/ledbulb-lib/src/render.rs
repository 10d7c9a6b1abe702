//! Bulb rendering — composes the layered ellipses onto a [`Surface`].
//!
//! Layer order is fixed: base fill, glow gradient, white reflection, border.
//! Each layer composites over the previous via alpha, so later layers only
//! tint what's underneath rather than replacing it.

use crate::color::{Rgba, Shades};
use crate::layout::{BulbGeometry, Padding};
use crate::surface::Surface;

/// Center of the white specular reflection.
pub const REFLECTION_CENTER: Rgba = Rgba::new(255, 255, 255, 180);
/// Rim of the reflection gradient (fully transparent white).
pub const REFLECTION_RIM: Rgba = Rgba::new(255, 255, 255, 0);
/// Thin border drawn over a lit bulb.
pub const BORDER_COLOR: Rgba = Rgba::new(0, 0, 0, 85);
/// Glow center alpha when the bulb is off.
pub const OFF_GLOW_ALPHA: u8 = 150;

/// Draw the bulb for the current color shades and on/off state.
///
/// Geometry is derived from the surface size and the host-supplied padding;
/// a degenerate surface still gets a 1-px bulb (diameter is clamped upstream).
pub fn draw_bulb(surface: &mut impl Surface, padding: &Padding, shades: &Shades, on: bool) {
    let geometry = BulbGeometry::compute(surface.size(), padding);

    let light = if on {
        shades.color
    } else {
        shades.dark.with_alpha(OFF_GLOW_ALPHA)
    };
    let base = if on { shades.dark } else { shades.dark_dark };

    // Base ellipse
    surface.fill_ellipse(geometry.bulb, base);

    // Glow: full color at the center fading to transparent at the rim
    surface.fill_radial_ellipse(geometry.bulb, light, light.with_alpha(0));

    // White reflection, offset up-left. The gradient spans the reflection's
    // own bounds (the original control reused the glow path here, a
    // copy-paste artifact we don't reproduce).
    surface.fill_radial_ellipse(geometry.reflection, REFLECTION_CENTER, REFLECTION_RIM);

    // Border only when lit
    if on {
        surface.stroke_ellipse(geometry.bulb, BORDER_COLOR);
    }
}
