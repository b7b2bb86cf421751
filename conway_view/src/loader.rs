// loader.rs - Reading RLE seed files

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use conway::Pattern;
use conway::patterns::DEFAULT_SEED;

/// Reads and decodes the RLE file at `path`.
pub async fn load_pattern(path: &Path) -> Result<Pattern> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let pattern = Pattern::decode(&text)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    info!(
        "Loaded {:?} ({}x{}, rule {}) from {}",
        pattern.name(),
        pattern.width(),
        pattern.height(),
        pattern.rule(),
        path.display()
    );
    Ok(pattern)
}

/// Loads the configured seed, or the built-in one when there is no file.
/// On a load failure the built-in seed is returned together with the error.
pub async fn load_seed(path: Option<&Path>) -> Result<(Pattern, Option<anyhow::Error>)> {
    let fallback = || DEFAULT_SEED.decode().context("built-in seed is invalid");
    match path {
        None => Ok((fallback()?, None)),
        Some(path) => match load_pattern(path).await {
            Ok(pattern) => Ok((pattern, None)),
            Err(e) => Ok((fallback()?, Some(e))),
        },
    }
}
