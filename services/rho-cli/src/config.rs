//! Configuration for the rho CLI.
//!
//! Settings layer in order of precedence: built-in defaults, then an
//! optional TOML file, then `RHO_*` environment variables, then
//! command-line flags applied by `main`.

use rho_board::File;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search depth in plies.
    pub depth: u32,
    /// Draw boards with ASCII glyphs instead of Unicode pawns.
    pub ascii: bool,
    /// Gap files announced when this engine plays Black, as single
    /// letters `a`-`h`.
    pub white_gap: String,
    pub black_gap: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: 4,
            ascii: false,
            white_gap: "a".to_string(),
            black_gap: "h".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides from `RHO_DEPTH` and `RHO_ASCII`.
    pub fn apply_env(&mut self) {
        if let Ok(depth) = env::var("RHO_DEPTH") {
            if let Ok(depth) = depth.parse() {
                self.depth = depth;
            }
        }
        if let Ok(ascii) = env::var("RHO_ASCII") {
            self.ascii = matches!(ascii.as_str(), "1" | "true" | "yes");
        }
    }

    /// The configured gap files as (white gap, black gap).
    pub fn gaps(&self) -> anyhow::Result<(File, File)> {
        Ok((parse_gap(&self.white_gap)?, parse_gap(&self.black_gap)?))
    }
}

fn parse_gap(text: &str) -> anyhow::Result<File> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(File::from_char(c)?),
        _ => anyhow::bail!("expected a single file letter, got {text:?}"),
    }
}
