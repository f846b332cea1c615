//! Shape geometry: paddles, ball, and the intervals they cover.
//!
//! Ranges are computed in `u32` so offsets near `u16::MAX` never overflow.

use crate::types::{BallBounds, FrameConfig, PaddleSide};

/// Half-open `[start, end)` interval of pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// `[start, start + len)`
    pub fn half_open(start: u16, len: u16) -> Self {
        Self {
            start: start as u32,
            end: start as u32 + len as u32,
        }
    }

    /// `[start, start + len]`, stored as `[start, start + len + 1)`.
    pub fn inclusive(start: u16, len: u16) -> Self {
        Self {
            start: start as u32,
            end: start as u32 + len as u32 + 1,
        }
    }

    #[inline(always)]
    pub fn contains(&self, v: u16) -> bool {
        let v = v as u32;
        v >= self.start && v < self.end
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A vertical paddle anchored to one edge of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: PaddleSide,
    /// Row of the paddle's top edge.
    pub offset: u16,
}

impl Paddle {
    pub fn new(side: PaddleSide, offset: u16) -> Self {
        Self { side, offset }
    }

    pub fn rows(&self, cfg: &FrameConfig) -> Span {
        Span::half_open(self.offset, cfg.paddle_height)
    }

    pub fn cols(&self, cfg: &FrameConfig) -> Span {
        match self.side {
            PaddleSide::Opponent => Span::half_open(0, cfg.paddle_width),
            PaddleSide::Player => {
                let start = cfg.player_column();
                Span::half_open(start, cfg.width - start)
            }
        }
    }

    #[inline]
    pub fn contains(&self, cfg: &FrameConfig, row: u16, col: u16) -> bool {
        self.rows(cfg).contains(row) && self.cols(cfg).contains(col)
    }
}

/// The ball, anchored by its top-left pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub x: u16,
    pub y: u16,
}

impl Ball {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn rows(&self, cfg: &FrameConfig) -> Span {
        ball_span(self.y, cfg)
    }

    pub fn cols(&self, cfg: &FrameConfig) -> Span {
        ball_span(self.x, cfg)
    }

    #[inline]
    pub fn contains(&self, cfg: &FrameConfig, row: u16, col: u16) -> bool {
        self.cols(cfg).contains(col) && self.rows(cfg).contains(row)
    }
}

fn ball_span(start: u16, cfg: &FrameConfig) -> Span {
    match cfg.ball_bounds {
        BallBounds::Inclusive => Span::inclusive(start, cfg.ball_size),
        BallBounds::HalfOpen => Span::half_open(start, cfg.ball_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_span_excludes_end() {
        let s = Span::half_open(240, 60);
        assert!(s.contains(240));
        assert!(s.contains(299));
        assert!(!s.contains(300));
        assert!(!s.contains(239));
        assert_eq!(s.len(), 60);
    }

    #[test]
    fn inclusive_span_includes_end() {
        let s = Span::inclusive(320, 10);
        assert!(s.contains(320));
        assert!(s.contains(330));
        assert!(!s.contains(331));
        assert_eq!(s.len(), 11);
    }

    #[test]
    fn span_near_u16_max_does_not_wrap() {
        let s = Span::half_open(u16::MAX - 5, 60);
        assert!(s.contains(u16::MAX));
        assert!(!s.contains(0));
        assert_eq!(s.end, u16::MAX as u32 + 55);
    }

    #[test]
    fn zero_length_span_is_empty() {
        let s = Span::half_open(7, 0);
        assert!(s.is_empty());
        assert!(!s.contains(7));
    }

    #[test]
    fn paddle_columns_follow_side() {
        let cfg = FrameConfig::default();
        let op = Paddle::new(PaddleSide::Opponent, 0);
        let pl = Paddle::new(PaddleSide::Player, 0);
        assert_eq!(op.cols(&cfg), Span { start: 0, end: 10 });
        assert_eq!(pl.cols(&cfg), Span { start: 630, end: 640 });
    }

    #[test]
    fn ball_footprint_by_bounds() {
        let cfg = FrameConfig::default();
        let ball = Ball::new(320, 240);
        assert_eq!(ball.cols(&cfg).len(), 11);
        assert!(ball.contains(&cfg, 250, 330));

        let cfg = cfg.with_ball_bounds(BallBounds::HalfOpen);
        assert_eq!(ball.rows(&cfg).len(), 10);
        assert!(ball.contains(&cfg, 249, 329));
        assert!(!ball.contains(&cfg, 250, 330));
    }
}
