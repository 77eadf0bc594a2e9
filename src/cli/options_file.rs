use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use log::{debug, info};
use morph_text::MorphOptions;

/// Load pairing options from a YAML file, falling back to the defaults when no
/// file is given. Missing keys take their default values.
pub fn load_options(path: Option<&Path>) -> Result<MorphOptions> {
    let Some(path) = path else {
        debug!("Using default morph options");
        return Ok(MorphOptions::default());
    };

    info!("Loading morph options from '{}'", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot load morph options from {}", path.display()))?;

    let options = serde_yaml::from_str(&contents).context("Failed to parse morph options")?;
    debug!("Morph options: {options:?}");

    Ok(options)
}
