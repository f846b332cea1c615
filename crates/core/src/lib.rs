//! Core frame logic module - pure, deterministic, and testable
//!
//! This module decides, for any canvas coordinate, whether the pixel belongs to
//! a paddle, the ball, or empty space. It has **zero dependencies** on
//! terminals, files, or other I/O, making it:
//!
//! - **Deterministic**: The same state always classifies the same way
//! - **Testable**: Every hit-test is a plain function call
//! - **Reusable**: A future time-stepping driver can call it once per frame
//!
//! # Module Structure
//!
//! - [`geometry`]: `Span`, `Paddle` and `Ball` hit-tests
//! - [`game_state`]: Shapes for one frame plus [`GameState::classify_pixel`]
//!
//! # Hit-test Conventions
//!
//! - **Paddles**: half-open on both axes, `[offset, offset + height)`
//! - **Ball**: inclusive on both axes by default, `[x, x + size]`, which gives
//!   an 11x11 footprint; [`types::BallBounds::HalfOpen`] switches it to the
//!   paddle convention
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{PaddleSide, Pixel};
//!
//! let state = GameState::default();
//! assert_eq!(state.classify_pixel(240, 0), Pixel::Paddle(PaddleSide::Opponent));
//! assert_eq!(state.classify_pixel(245, 325), Pixel::Ball);
//! assert_eq!(state.classify_pixel(0, 0), Pixel::Empty);
//! ```

pub mod game_state;
pub mod geometry;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use game_state::{BallDirection, GameState};
pub use geometry::{Ball, Paddle, Span};
