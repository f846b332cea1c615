//! Renderer configuration.
//!
//! All settings are optional. With nothing set, the binary writes
//! `render.txt` using the default 640x480 geometry.
//!
//! - `PONG_RENDER_PATH`: destination file (default: "render.txt")
//! - `PONG_PREVIEW`: set to "1" or "true" to print a terminal preview
//! - `PONG_BALL_BOUNDS`: "inclusive" (default) or "half-open"

use std::path::PathBuf;

use crate::types::{BallBounds, FrameConfig, DEFAULT_RENDER_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub output_path: PathBuf,
    pub preview: bool,
    pub frame: FrameConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_RENDER_PATH),
            preview: false,
            frame: FrameConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unset or unparseable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output_path = lookup("PONG_RENDER_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RENDER_PATH));

        let preview = match lookup("PONG_PREVIEW") {
            Some(v) => parse_flag(&v).unwrap_or_else(|| {
                log::warn!("ignoring unknown PONG_PREVIEW value {:?}", v);
                false
            }),
            None => false,
        };

        let ball_bounds = match lookup("PONG_BALL_BOUNDS") {
            Some(v) => v.parse::<BallBounds>().unwrap_or_else(|_| {
                log::warn!("ignoring unknown PONG_BALL_BOUNDS value {:?}", v);
                BallBounds::default()
            }),
            None => BallBounds::default(),
        };

        Self {
            output_path,
            preview,
            frame: FrameConfig::default().with_ball_bounds(ball_bounds),
        }
    }
}

/// "1"/"true" and "0"/"false"/"" (case-insensitive); anything else is `None`.
fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" | "" => Some(false),
        _ => None,
    }
}
