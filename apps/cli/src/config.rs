// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch configuration loaded from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format '{other}'")),
        }
    }
}

/// Batch configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `<name>.geom` files.
    pub data_dir: PathBuf,
    /// Solids to process, in order.
    pub models: Vec<String>,
    /// Where to write `<name>.svg` drawings; none when unset.
    pub svg_dir: Option<PathBuf>,
    /// Include hidden edge portions in drawings.
    pub draw_hidden: bool,
    /// SVG canvas width and height in pixels.
    pub canvas_size: u32,
    /// Output format.
    pub report: ReportFormat,
    /// Wait for Return between solids.
    pub pause: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| {
            var(key)
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(false)
        };

        Self {
            data_dir: var("SHADOW_DATA_DIR")
                .unwrap_or_else(|| "data".into())
                .into(),
            models: var("SHADOW_MODELS")
                .unwrap_or_else(|| "test1,test2,cube,box".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            svg_dir: var("SHADOW_SVG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            draw_hidden: flag("SHADOW_DRAW_HIDDEN"),
            canvas_size: var("SHADOW_CANVAS_SIZE")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&size| size > 0)
                .unwrap_or(900),
            report: var("SHADOW_REPORT")
                .map(|s| {
                    s.parse().unwrap_or_else(|err| {
                        tracing::warn!(%err, "falling back to text report");
                        ReportFormat::Text
                    })
                })
                .unwrap_or_default(),
            pause: flag("SHADOW_PAUSE"),
        }
    }

    /// Path of the description file for a named model.
    pub fn model_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.geom"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
