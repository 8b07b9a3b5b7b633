//! Background parallax: a stateless mapping from the page scroll offset to a
//! vertical translation, applied to registered background frames.

use fltk::{frame::Frame, prelude::*};

pub const PARALLAX_RATE: f64 = -0.5;

/// Translation applied on top of normal scrolling.
pub fn offset_for(scroll_y: i32) -> i32 {
    (scroll_y as f64 * PARALLAX_RATE).round() as i32
}

struct Layer {
    frame: Frame,
    base_x: i32,
    /// Window y when the page is scrolled to the top.
    base_y: i32,
}

/// Owns the registered background frames and repositions them on every
/// scroll tick. Positions are computed from scratch each tick, so ticks are
/// idempotent and ordering against the scroll widget's own moves is
/// irrelevant.
pub struct ParallaxDriver {
    layers: Vec<Layer>,
}

impl ParallaxDriver {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Register a frame at its resting (unscrolled) position.
    pub fn register(&mut self, frame: Frame) {
        let base_x = frame.x();
        let base_y = frame.y();
        self.layers.push(Layer {
            frame,
            base_x,
            base_y,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn apply(&mut self, scroll_y: i32) {
        if self.layers.is_empty() {
            return;
        }
        let offset = offset_for(scroll_y);
        for layer in &mut self.layers {
            layer
                .frame
                .set_pos(layer.base_x, layer.base_y - scroll_y + offset);
        }
    }
}

impl Default for ParallaxDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_half_scroll_upward() {
        assert_eq!(offset_for(0), 0);
        assert_eq!(offset_for(100), -50);
        assert_eq!(offset_for(301), -151);
    }

    #[test]
    fn test_offset_handles_negative_scroll() {
        // Rubber-banding never happens with the page scrollbar, but the
        // mapping itself is total
        assert_eq!(offset_for(-40), 20);
    }
}
