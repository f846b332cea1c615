//! TerminalPreview: shows a downscaled, colored frame on a terminal.
//!
//! A full 640x480 canvas is far wider than a terminal, so each preview cell
//! covers an `x_step` x `y_step` block of pixels. The file output is unaffected.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::{PaddleSide, Pixel};

/// Block size sampled for one preview cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Downscale {
    pub x_step: u16,
    pub y_step: u16,
}

impl Default for Downscale {
    fn default() -> Self {
        // 640x480 -> 80x30; the 2:1 ratio roughly matches terminal glyph aspect.
        Self {
            x_step: 8,
            y_step: 16,
        }
    }
}

impl Downscale {
    pub fn new(x_step: u16, y_step: u16) -> Self {
        Self {
            x_step: x_step.max(1),
            y_step: y_step.max(1),
        }
    }

    /// Preview size in cells for a framebuffer of `width` x `height` pixels.
    pub fn preview_size(&self, width: u16, height: u16) -> (u16, u16) {
        (width.div_ceil(self.x_step), height.div_ceil(self.y_step))
    }
}

/// Encode a downscaled preview into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_preview_into(fb: &FrameBuffer, scale: Downscale, out: &mut Vec<u8>) -> Result<()> {
    let scale = Downscale::new(scale.x_step, scale.y_step);
    let (cols, rows) = scale.preview_size(fb.width(), fb.height());

    let mut current: Option<Color> = None;
    for by in 0..rows {
        for bx in 0..cols {
            let pixel = sample_block(fb, bx * scale.x_step, by * scale.y_step, scale);
            let (color, ch) = preview_cell(pixel);
            if current != Some(color) {
                out.queue(SetForegroundColor(color))?;
                current = Some(color);
            }
            out.queue(Print(ch))?;
        }
        out.queue(Print('\n'))?;
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Highest-priority shape in the block: paddles, then ball, then empty.
fn sample_block(fb: &FrameBuffer, x0: u16, y0: u16, scale: Downscale) -> Pixel {
    let x1 = x0.saturating_add(scale.x_step).min(fb.width());
    let y1 = y0.saturating_add(scale.y_step).min(fb.height());

    let mut best = Pixel::Empty;
    for y in y0..y1 {
        for x in x0..x1 {
            match fb.get(x, y).unwrap_or_default() {
                p @ Pixel::Paddle(_) => return p,
                Pixel::Ball => best = Pixel::Ball,
                Pixel::Empty => {}
            }
        }
    }
    best
}

fn preview_cell(pixel: Pixel) -> (Color, char) {
    match pixel {
        Pixel::Paddle(PaddleSide::Opponent) => (rgb(220, 80, 80), '█'),
        Pixel::Paddle(PaddleSide::Player) => (rgb(80, 120, 220), '█'),
        Pixel::Ball => (rgb(240, 220, 80), '█'),
        Pixel::Empty => (rgb(90, 90, 100), '·'),
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Flushes previews to a terminal, usually stdout.
pub struct TerminalPreview<W: Write> {
    out: W,
    scale: Downscale,
    buf: Vec<u8>,
}

impl<W: Write> TerminalPreview<W> {
    pub fn with_writer(out: W, scale: Downscale) -> Self {
        Self {
            out,
            scale,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn show(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_preview_into(fb, self.scale, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use crate::core::GameState;
    use crate::frame_view::FrameView;

    fn block_count(out: &[u8]) -> usize {
        String::from_utf8_lossy(out).chars().filter(|&c| c == '█').count()
    }

    #[test]
    fn default_scale_is_80_by_30() {
        assert_eq!(Downscale::default().preview_size(640, 480), (80, 30));
        assert_eq!(Downscale::new(8, 16).preview_size(641, 481), (81, 31));
    }

    #[test]
    fn zero_steps_are_clamped() {
        assert_eq!(Downscale::new(0, 0), Downscale::new(1, 1));
    }

    #[test]
    fn default_frame_preview_shape() {
        let fb = FrameView::new().render(&GameState::default());
        let mut out = Vec::new();
        encode_preview_into(&fb, Downscale::default(), &mut out).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('\n').count(), 30);
        // Each paddle spans 2x4 blocks, the 11x11 ball spans 2x1.
        assert_eq!(block_count(&out), 8 + 8 + 2);
    }

    #[test]
    fn show_flushes_encoded_preview_to_writer() {
        let fb = FrameView::new().render(&GameState::default());
        let mut preview = TerminalPreview::with_writer(Vec::new(), Downscale::default());
        preview.show(&fb).unwrap();
        let written = preview.into_inner();

        let mut expected = Vec::new();
        encode_preview_into(&fb, Downscale::default(), &mut expected).unwrap();
        assert_eq!(written, expected);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn show_reports_writer_errors() {
        let fb = FrameBuffer::new(8, 16);
        let mut preview = TerminalPreview::with_writer(ClosedPipe, Downscale::default());
        assert!(preview.show(&fb).is_err());
    }

    #[test]
    fn paddle_takes_priority_in_shared_block() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(0, 0, Pixel::Ball);
        fb.set(1, 0, Pixel::Paddle(PaddleSide::Player));
        assert_eq!(
            sample_block(&fb, 0, 0, Downscale::new(2, 1)),
            Pixel::Paddle(PaddleSide::Player)
        );
    }

    #[test]
    fn unit_scale_preview_matches_pixels() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.set(1, 0, Pixel::Ball);
        let mut out = Vec::new();
        encode_preview_into(&fb, Downscale::new(1, 1), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        let glyphs: String = text.chars().filter(|c| matches!(c, '█' | '·')).collect();
        assert_eq!(glyphs, "·█·");
    }
}
