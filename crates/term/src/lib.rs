//! Frame output module.
//!
//! Turns a `core::GameState` into output: first into a framebuffer of
//! classified pixels, then into the text grid written to disk, and optionally
//! into a downscaled colored preview for a terminal.
//!
//! Pipeline:
//! - [`FrameView`] classifies every canvas pixel into a [`FrameBuffer`] (pure)
//! - [`encode_text_into`] turns the framebuffer into the text grid (pure)
//! - [`FrameWriter`] writes the encoded grid to its destination file
//! - [`TerminalPreview`] flushes a crossterm-colored preview to a terminal writer

pub mod fb;
pub mod frame_view;
pub mod preview;
pub mod text;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::FrameBuffer;
pub use frame_view::{FrameView, Glyphs};
pub use preview::{encode_preview_into, Downscale, TerminalPreview};
pub use text::{encode_text_into, frame_fingerprint, FrameSummary, FrameWriter};
