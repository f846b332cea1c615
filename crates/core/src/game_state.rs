//! Game state for a single frame and the per-pixel classifier.

use crate::geometry::{Ball, Paddle};
use crate::types::{FrameConfig, PaddleSide, Pixel};

/// Ball direction flags.
///
/// Reserved for a time-stepping driver; nothing in frame rendering reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallDirection {
    pub right: bool,
    pub down: bool,
}

impl Default for BallDirection {
    fn default() -> Self {
        Self {
            right: true,
            down: true,
        }
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: FrameConfig,
    /// Left paddle (`op_current`).
    pub opponent: Paddle,
    /// Right paddle (`current`).
    pub player: Paddle,
    pub ball: Ball,
    /// Reserved, see [`BallDirection`].
    pub ball_dir: BallDirection,
    /// Reserved, never updated by rendering.
    pub score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

impl GameState {
    /// Initial state for `config`: paddles at mid-height, ball at the centre.
    pub fn new(config: FrameConfig) -> Self {
        let (offset, ball_x, ball_y) = config.centered();
        Self {
            config,
            opponent: Paddle::new(PaddleSide::Opponent, offset),
            player: Paddle::new(PaddleSide::Player, offset),
            ball: Ball::new(ball_x, ball_y),
            ball_dir: BallDirection::default(),
            score: 0,
        }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn with_paddles(mut self, op_current: u16, current: u16) -> Self {
        self.opponent.offset = op_current;
        self.player.offset = current;
        self
    }

    pub fn with_ball(mut self, x: u16, y: u16) -> Self {
        self.ball = Ball::new(x, y);
        self
    }

    /// Classify one pixel.
    ///
    /// No bounds checking is done; the frame loop only ever asks for
    /// coordinates inside the canvas. Overlaps resolve opponent paddle first,
    /// then player paddle, then ball.
    pub fn classify_pixel(&self, row: u16, col: u16) -> Pixel {
        let cfg = &self.config;
        if self.opponent.contains(cfg, row, col) {
            Pixel::Paddle(PaddleSide::Opponent)
        } else if self.player.contains(cfg, row, col) {
            Pixel::Paddle(PaddleSide::Player)
        } else if self.ball.contains(cfg, row, col) {
            Pixel::Ball
        } else {
            Pixel::Empty
        }
    }

    #[inline]
    pub fn is_filled(&self, row: u16, col: u16) -> bool {
        self.classify_pixel(row, col).is_filled()
    }

    /// Log the spans each shape covers.
    pub fn trace_shapes(&self) {
        let cfg = &self.config;
        for paddle in [&self.opponent, &self.player] {
            let rows = paddle.rows(cfg);
            let cols = paddle.cols(cfg);
            log::trace!(
                "paddle {:?} rows [{}, {}) cols [{}, {})",
                paddle.side,
                rows.start,
                rows.end,
                cols.start,
                cols.end
            );
        }
        let rows = self.ball.rows(cfg);
        let cols = self.ball.cols(cfg);
        log::trace!(
            "ball ({}) rows [{}, {}) cols [{}, {})",
            cfg.ball_bounds,
            rows.start,
            rows.end,
            cols.start,
            cols.end
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BallBounds;

    #[test]
    fn default_state_positions() {
        let gs = GameState::default();
        assert_eq!(gs.opponent.offset, 240);
        assert_eq!(gs.player.offset, 240);
        assert_eq!(gs.ball, Ball::new(320, 240));
        assert_eq!(gs.ball_dir, BallDirection { right: true, down: true });
        assert_eq!(gs.score, 0);
    }

    #[test]
    fn default_state_reference_pixels() {
        let gs = GameState::default();
        assert_eq!(gs.classify_pixel(240, 0), Pixel::Paddle(PaddleSide::Opponent));
        assert_eq!(gs.classify_pixel(240, 639), Pixel::Paddle(PaddleSide::Player));
        assert_eq!(gs.classify_pixel(245, 325), Pixel::Ball);
        assert_eq!(gs.classify_pixel(0, 0), Pixel::Empty);
    }

    #[test]
    fn paddle_rows_are_half_open() {
        let gs = GameState::default();
        assert!(gs.is_filled(299, 0));
        assert!(!gs.is_filled(300, 0));
        assert!(!gs.is_filled(239, 0));
        assert!(gs.is_filled(240, 9));
        assert!(!gs.is_filled(240, 10));
        assert!(gs.is_filled(240, 630));
        assert!(!gs.is_filled(240, 629));
    }

    #[test]
    fn ball_is_inclusive_on_far_edges() {
        let gs = GameState::default();
        assert_eq!(gs.classify_pixel(250, 330), Pixel::Ball);
        assert_eq!(gs.classify_pixel(251, 330), Pixel::Empty);
        assert_eq!(gs.classify_pixel(250, 331), Pixel::Empty);
    }

    #[test]
    fn half_open_ball_drops_far_edges() {
        let cfg = FrameConfig::default().with_ball_bounds(BallBounds::HalfOpen);
        let gs = GameState::new(cfg);
        assert_eq!(gs.classify_pixel(249, 329), Pixel::Ball);
        assert_eq!(gs.classify_pixel(250, 330), Pixel::Empty);
    }

    #[test]
    fn paddle_wins_over_ball_on_overlap() {
        let gs = GameState::default().with_ball(0, 240);
        assert_eq!(gs.classify_pixel(240, 0), Pixel::Paddle(PaddleSide::Opponent));
        assert_eq!(gs.classify_pixel(240, 10), Pixel::Ball);
    }

    #[test]
    fn classification_is_deterministic() {
        let gs = GameState::default();
        for (row, col) in [(0, 0), (240, 0), (245, 325), (479, 639), (300, 630)] {
            assert_eq!(gs.classify_pixel(row, col), gs.classify_pixel(row, col));
        }
    }

    #[test]
    fn reserved_fields_do_not_affect_classification() {
        let a = GameState::default();
        let mut b = a.clone();
        b.ball_dir = BallDirection {
            right: false,
            down: false,
        };
        b.score = 7;
        for row in (0..480).step_by(7) {
            for col in (0..640).step_by(5) {
                assert_eq!(a.classify_pixel(row, col), b.classify_pixel(row, col));
            }
        }
    }
}
