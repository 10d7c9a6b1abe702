//! Color handling for the LED indicator.
//!
//! Colors are straight-alpha RGBA. The bulb's off-state and base shading use
//! two derived shades produced by a fixed darken transform applied once and
//! twice; [`Shades`] bundles a color with both so they can never drift apart.

/// Default LED color when none is configured.
pub const DEFAULT_COLOR: Rgba = Rgba::new(153, 255, 54, 255);

/// Numerator/denominator of the darken transform: each RGB channel is scaled
/// by 2/3 in integer arithmetic. Alpha is preserved.
const DARKEN_NUM: u16 = 2;
const DARKEN_DEN: u16 = 3;

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Same RGB with a replacement alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }

    /// One step of the darken transform: RGB scaled by 2/3, alpha kept.
    pub const fn darken(self) -> Self {
        const fn dark(ch: u8) -> u8 {
            ((ch as u16 * DARKEN_NUM) / DARKEN_DEN) as u8
        }
        Rgba {
            r: dark(self.r),
            g: dark(self.g),
            b: dark(self.b),
            a: self.a,
        }
    }

    /// Per-channel linear interpolation toward `other` (all four channels).
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// A LED color together with its derived dark and darkest shades.
///
/// The shades are recomputed whenever the color is set and are never
/// independently assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shades {
    pub color: Rgba,
    pub dark: Rgba,
    pub dark_dark: Rgba,
}

impl Shades {
    /// Derive both shades from `color`.
    pub const fn of(color: Rgba) -> Self {
        let dark = color.darken();
        Shades {
            color,
            dark,
            dark_dark: dark.darken(),
        }
    }
}

/// Parse a color string into an [`Rgba`].
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`, `"#FF000080"` (with alpha)
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`, `"yellow"`, `"purple"`, `"cyan"`
pub fn parse_color(s: &str) -> crate::error::Result<Rgba> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(Rgba::opaque(0xFF, 0x00, 0x00)),
        "green" => return Ok(Rgba::opaque(0x00, 0xFF, 0x00)),
        "blue" => return Ok(Rgba::opaque(0x00, 0x00, 0xFF)),
        "white" => return Ok(Rgba::opaque(0xFF, 0xFF, 0xFF)),
        "orange" => return Ok(Rgba::opaque(0xFF, 0x80, 0x00)),
        "yellow" => return Ok(Rgba::opaque(0xFF, 0xFF, 0x00)),
        "purple" => return Ok(Rgba::opaque(0x80, 0x00, 0xFF)),
        "cyan" => return Ok(Rgba::opaque(0x00, 0xFF, 0xFF)),
        "off" | "black" => return Ok(Rgba::opaque(0x00, 0x00, 0x00)),
        _ => {}
    }

    // Hex color, 6 digits (opaque) or 8 (with alpha). Reject non-ASCII up
    // front: the length checks below count bytes, and slicing a multibyte
    // character would panic.
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return Err(crate::LedError::Color(format!("Invalid hex color: {s}")));
    }
    let (rgb_part, alpha_part) = match hex.len() {
        6 => (hex, None),
        8 => (&hex[..6], Some(&hex[6..])),
        _ => {
            return Err(crate::LedError::Color(format!(
                "Invalid color: {s} (use #RRGGBB, #RRGGBBAA, or a color name)"
            )));
        }
    };
    let rgb = u32::from_str_radix(rgb_part, 16)
        .map_err(|_| crate::LedError::Color(format!("Invalid hex color: {s}")))?;
    let a = match alpha_part {
        Some(p) => u8::from_str_radix(p, 16)
            .map_err(|_| crate::LedError::Color(format!("Invalid hex color: {s}")))?,
        None => 255,
    };
    Ok(Rgba::new(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
        a,
    ))
}

/// Format a color as `#RRGGBB` (or `#RRGGBBAA` when not fully opaque).
pub fn format_color(c: Rgba) -> String {
    if c.a == 255 {
        format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a)
    }
}
