//! Text encoding of a framebuffer and the file writer for it.
//!
//! The on-disk format is a literal character grid: `height` lines, each with
//! exactly `width` glyphs followed by `\n`. No header, no trailing content.

use std::hash::Hasher;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tempfile::NamedTempFile;

use crate::fb::FrameBuffer;
use crate::frame_view::Glyphs;

/// Encode a full frame as text into `out`.
///
/// `out` is cleared first so callers can reuse one buffer across frames.
pub fn encode_text_into(fb: &FrameBuffer, glyphs: Glyphs, out: &mut Vec<u8>) {
    out.clear();

    let fill = glyphs.fill.len_utf8();
    let bg = glyphs.background.len_utf8();
    let per_glyph = fill.max(bg);
    out.reserve((fb.width() as usize * per_glyph + 1) * fb.height() as usize);

    let mut tmp = [0u8; 4];
    for row in 0..fb.height() {
        if let Some(pixels) = fb.row(row) {
            for &pixel in pixels {
                let ch = glyphs.for_pixel(pixel);
                out.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
            }
        }
        out.push(b'\n');
    }
}

/// Stable 64-bit FNV-1a hasher.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions/platforms.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Fingerprint of an encoded frame. Identical bytes give identical fingerprints.
pub fn frame_fingerprint(bytes: &[u8]) -> u64 {
    let mut h = Fnv1aHasher::new();
    h.write(bytes);
    h.finish()
}

/// What a successful write produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub rows: u16,
    pub cols: u16,
    pub bytes: usize,
    pub filled: usize,
    pub fingerprint: u64,
}

/// Writes text frames to a fixed destination.
pub struct FrameWriter {
    path: PathBuf,
    glyphs: Glyphs,
    buf: Vec<u8>,
}

impl FrameWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            glyphs: Glyphs::default(),
            buf: Vec::new(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes of the most recently encoded frame.
    pub fn last_encoded(&self) -> &[u8] {
        &self.buf
    }

    /// Encode `fb` and write it to the destination, replacing any existing file.
    ///
    /// The frame is staged in a temporary file next to the destination and
    /// renamed over it only once every byte is on disk. On error the previous
    /// file (if any) is left untouched and the staging file is removed. There
    /// is no retry.
    pub fn write(&mut self, fb: &FrameBuffer) -> Result<FrameSummary> {
        encode_text_into(fb, self.glyphs, &mut self.buf);
        self.stage_and_persist(|file, bytes| {
            file.write_all(bytes)?;
            file.flush()
        })?;

        let summary = FrameSummary {
            rows: fb.height(),
            cols: fb.width(),
            bytes: self.buf.len(),
            filled: fb.filled_count(),
            fingerprint: frame_fingerprint(&self.buf),
        };
        log::debug!(
            "encoded {}x{} frame ({} filled pixels)",
            summary.cols,
            summary.rows,
            summary.filled
        );
        Ok(summary)
    }

    fn stage_and_persist(
        &self,
        fill: impl FnOnce(&mut NamedTempFile, &[u8]) -> io::Result<()>,
    ) -> Result<()> {
        let path = self.path.display();
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)
            .map_err(|e| anyhow!("render: create {} failed: {}", path, e))?;
        fill(&mut staged, &self.buf)
            .map_err(|e| anyhow!("render: write {} failed: {}", path, e))?;

        // Staging files are created 0600; a plain `File::create` would give 0644.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(|e| anyhow!("render: chmod {} failed: {}", path, e))?;
        }

        staged
            .persist(&self.path)
            .map_err(|e| anyhow!("render: persist {} failed: {}", path, e.error))?;
        Ok(())
    }
}
