//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (classification, framebuffer, text encoding, preview).
//!
//! # Canvas Dimensions
//!
//! - **Width**: 640 columns (indexed 0-639)
//! - **Height**: 480 rows (indexed 0-479)
//!
//! # Shape Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDLE_WIDTH` | 10 | Paddle width in pixels |
//! | `PADDLE_HEIGHT` | 60 | Paddle height in pixels |
//! | `BALL_SIZE` | 10 | Ball edge length in pixels |
//! | `BALL_SPEED` | 2 | Reserved for a time-stepping driver |
//! | `PADDLE_SPEED` | 2 | Reserved for a time-stepping driver |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{BallBounds, FrameConfig, Pixel, PaddleSide, SCREEN_WIDTH};
//!
//! let config = FrameConfig::default();
//! assert_eq!(config.width, SCREEN_WIDTH);
//! assert_eq!(config.ball_bounds, BallBounds::Inclusive);
//!
//! let half_open = config.with_ball_bounds(BallBounds::HalfOpen);
//! assert_eq!(half_open.ball_extent(), 10);
//!
//! assert!(Pixel::Paddle(PaddleSide::Opponent).is_filled());
//! assert!(!Pixel::Empty.is_filled());
//! ```

use std::fmt;
use std::str::FromStr;

/// Canvas width in pixels (640 columns)
pub const SCREEN_WIDTH: u16 = 640;

/// Canvas height in pixels (480 rows)
pub const SCREEN_HEIGHT: u16 = 480;

/// Ball edge length in pixels
pub const BALL_SIZE: u16 = 10;

/// Paddle width in pixels
pub const PADDLE_WIDTH: u16 = 10;

/// Paddle height in pixels
pub const PADDLE_HEIGHT: u16 = 60;

/// Ball speed in pixels per step. Not read by single-frame rendering.
pub const BALL_SPEED: u16 = 2;

/// Paddle speed in pixels per step. Not read by single-frame rendering.
pub const PADDLE_SPEED: u16 = 2;

/// Glyph written for paddle and ball pixels.
pub const FILL_GLYPH: char = '%';

/// Glyph written for empty pixels.
pub const BACKGROUND_GLYPH: char = ' ';

/// Destination used when nothing else is configured.
pub const DEFAULT_RENDER_PATH: &str = "render.txt";

/// Interval convention for the ball hit-test.
///
/// Paddles always use half-open ranges. The ball historically used inclusive
/// ranges on both axes, which gives it an 11x11 footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BallBounds {
    /// `[x, x + size]` on both axes (bit-exact with existing render files).
    #[default]
    Inclusive,
    /// `[x, x + size)` on both axes, same convention as the paddles.
    HalfOpen,
}

impl BallBounds {
    pub fn as_str(self) -> &'static str {
        match self {
            BallBounds::Inclusive => "inclusive",
            BallBounds::HalfOpen => "half-open",
        }
    }
}

impl FromStr for BallBounds {
    type Err = ();

    /// Parse from string (case-insensitive, `_` and `-` interchangeable).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "inclusive" => Ok(BallBounds::Inclusive),
            "half-open" | "halfopen" => Ok(BallBounds::HalfOpen),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BallBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge of the canvas a paddle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleSide {
    /// Left edge.
    Opponent,
    /// Right edge.
    Player,
}

/// Classification of a single canvas pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    #[default]
    Empty,
    Paddle(PaddleSide),
    Ball,
}

impl Pixel {
    /// Paddle and ball pixels are both "filled"; the text encoding does not
    /// distinguish between them.
    #[inline]
    pub fn is_filled(self) -> bool {
        !matches!(self, Pixel::Empty)
    }
}

/// Geometry of a single frame.
///
/// Passed explicitly into the renderer so canvas sizes can be varied in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    pub width: u16,
    pub height: u16,
    pub paddle_width: u16,
    pub paddle_height: u16,
    pub ball_size: u16,
    pub ball_bounds: BallBounds,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl FrameConfig {
    /// Canvas of the given size with the standard paddle and ball dimensions.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,
            ball_bounds: BallBounds::Inclusive,
        }
    }

    pub fn with_ball_bounds(mut self, ball_bounds: BallBounds) -> Self {
        self.ball_bounds = ball_bounds;
        self
    }

    pub fn with_paddle_size(mut self, paddle_width: u16, paddle_height: u16) -> Self {
        self.paddle_width = paddle_width;
        self.paddle_height = paddle_height;
        self
    }

    pub fn with_ball_size(mut self, ball_size: u16) -> Self {
        self.ball_size = ball_size;
        self
    }

    /// Number of pixels in the canvas.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Number of pixels the ball covers along each axis.
    pub fn ball_extent(&self) -> u32 {
        match self.ball_bounds {
            BallBounds::Inclusive => self.ball_size as u32 + 1,
            BallBounds::HalfOpen => self.ball_size as u32,
        }
    }

    /// Column where the player paddle starts.
    pub fn player_column(&self) -> u16 {
        self.width.saturating_sub(self.paddle_width)
    }

    /// True when the canvas leaves room for both paddles and the ball between them.
    pub fn paddles_disjoint(&self) -> bool {
        (self.width as u32) > 2 * (self.paddle_width as u32) + (self.ball_size as u32)
    }

    /// Initial positions: both paddle offsets at `height / 2`, ball top-left at
    /// the canvas centre. Returns `(paddle_offset, ball_x, ball_y)`.
    pub fn centered(&self) -> (u16, u16, u16) {
        (self.height / 2, self.width / 2, self.height / 2)
    }
}
