//! TUI Pong (workspace facade crate).
//!
//! Exposes `tui_pong::{core,term,types}` while the implementation lives in
//! dedicated crates under `crates/`. The [`config`] module holds the
//! environment-driven settings used by the `tui-pong` binary.

pub mod config;

pub use tui_pong_core as core;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

use std::io::{self, Write};

use anyhow::Result;

use crate::config::RenderConfig;
use crate::core::GameState;
use crate::term::{Downscale, FrameSummary, FrameView, FrameWriter, TerminalPreview};

/// Render the initial frame for `config` and write it to the configured path.
///
/// Optionally shows the terminal preview on stdout afterwards.
pub fn run(config: &RenderConfig) -> Result<FrameSummary> {
    run_with_preview(config, io::stdout())
}

/// Same as [`run`], with the preview sent to `preview_out`.
///
/// Only a failure to write the frame file is an error. A preview that cannot
/// be shown is logged and ignored; the frame is already on disk by then.
pub fn run_with_preview<W: Write>(config: &RenderConfig, preview_out: W) -> Result<FrameSummary> {
    let state = GameState::new(config.frame);
    state.trace_shapes();

    let fb = FrameView::new().render(&state);
    let mut writer = FrameWriter::new(&config.output_path);
    let summary = writer.write(&fb)?;

    log::info!(
        "wrote {} ({} rows, {} bytes, fingerprint {:016x})",
        writer.path().display(),
        summary.rows,
        summary.bytes,
        summary.fingerprint
    );

    if config.preview {
        let mut preview = TerminalPreview::with_writer(preview_out, Downscale::default());
        if let Err(e) = preview.show(&fb) {
            log::warn!("preview failed: {}", e);
        }
    }

    Ok(summary)
}
