//! Framebuffer of classified pixels.

use crate::types::Pixel;

/// 2D framebuffer holding one [`Pixel`] per canvas coordinate, row-major.
///
/// Cell accessors take `(x, y)`: `x` is the column, `y` the row. Note this is
/// the reverse of `GameState::classify_pixel(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Pixel>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Pixel::Empty; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Pixel::Empty);
    }

    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, pixel: Pixel) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = pixel;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Pixel::Empty);
    }

    /// Scanline `y`, or `None` past the last row.
    pub fn row(&self, y: u16) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact panics on 0; a zero-width buffer has no cells anyway.
        self.cells.chunks_exact((self.width as usize).max(1))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|p| p.is_filled()).count()
    }
}
