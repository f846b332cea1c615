//! FrameView: maps `core::GameState` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::FrameBuffer;
use crate::types::{BACKGROUND_GLYPH, FILL_GLYPH, Pixel};

/// Characters used when a frame is encoded as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub fill: char,
    pub background: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            fill: FILL_GLYPH,
            background: BACKGROUND_GLYPH,
        }
    }
}

impl Glyphs {
    #[inline]
    pub fn for_pixel(&self, pixel: Pixel) -> char {
        if pixel.is_filled() {
            self.fill
        } else {
            self.background
        }
    }
}

/// Renders a full canvas by classifying every pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameView;

impl FrameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the game state into an existing framebuffer.
    ///
    /// The framebuffer is resized to the state's canvas. Pixels are visited
    /// row-major, top-to-bottom then left-to-right.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let cfg = state.config();
        fb.resize(cfg.width, cfg.height);

        for y in 0..cfg.height {
            for x in 0..cfg.width {
                fb.set(x, y, state.classify_pixel(y, x));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let cfg = state.config();
        let mut fb = FrameBuffer::new(cfg.width, cfg.height);
        self.render_into(state, &mut fb);
        fb
    }
}
