//! LED indicator state machine — testable core decoupled from the host.
//!
//! `LedIndicator` owns the color (with derived shades), the on/off flag, and
//! the blink timer. Hosts deliver timer ticks via [`LedIndicator::on_tick`],
//! poll [`LedIndicator::take_repaint_request`] after event delivery, and call
//! [`LedIndicator::paint`] when a repaint is due. Everything runs on the host
//! UI thread; no operation blocks.

use crate::canvas::Canvas;
use crate::color::{DEFAULT_COLOR, Rgba, Shades};
use crate::error::Result;
use crate::host::Host;
use crate::layout::Padding;
use crate::render;
use crate::surface::Surface;
use crate::timer::BlinkTimer;

/// A circular indicator light: colored, on/off, optionally blinking.
#[derive(Debug, Clone)]
pub struct LedIndicator {
    shades: Shades,
    on: bool,
    timer: BlinkTimer,
    needs_repaint: bool,
}

impl Default for LedIndicator {
    fn default() -> Self {
        LedIndicator::new()
    }
}

impl LedIndicator {
    /// Indicator with the default green color, lit, not blinking.
    pub fn new() -> Self {
        LedIndicator::with_color(DEFAULT_COLOR)
    }

    pub fn with_color(color: Rgba) -> Self {
        LedIndicator {
            shades: Shades::of(color),
            on: true,
            timer: BlinkTimer::new(),
            needs_repaint: true,
        }
    }

    // ── Color ──

    /// Set the primary color. The dark and darkest shades are recomputed
    /// synchronously; they are never settable on their own. Any RGBA value
    /// is accepted.
    pub fn set_color(&mut self, color: Rgba) {
        self.shades = Shades::of(color);
        self.request_repaint();
    }

    pub fn color(&self) -> Rgba {
        self.shades.color
    }

    /// Dark shade of the LED color, used for the lit base and off-state glow.
    pub fn dark_color(&self) -> Rgba {
        self.shades.dark
    }

    /// Darkest shade, used for the off-state base.
    pub fn dark_dark_color(&self) -> Rgba {
        self.shades.dark_dark
    }

    pub fn shades(&self) -> &Shades {
        &self.shades
    }

    // ── On/off ──

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        self.request_repaint();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    // ── Blinking ──

    /// Start blinking at `interval_ms`, or stop when it is 0.
    ///
    /// A positive interval forces the light on and enables the timer; the
    /// interval is handed to the host timer facility unvalidated. Zero stops
    /// the timer and forces the light off, effective before the next tick.
    pub fn blink(&mut self, interval_ms: u64) {
        if interval_ms > 0 {
            log::debug!("blink: starting at {interval_ms} ms");
            self.set_on(true);
            self.timer.set_interval(interval_ms);
            self.timer.start();
        } else {
            log::debug!("blink: stopping");
            self.timer.stop();
            self.set_on(false);
        }
    }

    /// Periodic tick from the host timer. Toggles the light while blinking;
    /// a tick already in flight when `blink(0)` lands is ignored.
    pub fn on_tick(&mut self) {
        if !self.timer.enabled() {
            log::trace!("tick ignored: timer stopped");
            return;
        }
        self.set_on(!self.on);
    }

    /// Blink timer registration state, for host scheduling.
    pub fn timer(&self) -> &BlinkTimer {
        &self.timer
    }

    // ── Repaint ──

    /// Whether visible state changed since the last paint.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Consume the pending repaint request, if any. Hosts poll this after
    /// delivering events and schedule a paint when it returns true.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    // ── Painting ──

    /// Host-invoked paint: render into a fresh off-screen frame and present
    /// it. Clears the pending repaint request on success.
    pub fn paint(&mut self, host: &mut impl Host) -> Result<()> {
        let mut frame = Canvas::new(host.client_size());
        self.render(&mut frame, &host.padding());
        host.present(&frame)?;
        self.needs_repaint = false;
        Ok(())
    }

    /// Render the bulb onto any surface, for hosts that manage their own
    /// composition buffer.
    pub fn render(&self, surface: &mut impl Surface, padding: &Padding) {
        render::draw_bulb(surface, padding, &self.shades, self.on);
    }
}
