//! Rendering and writing the generated data module.
//!
//! The output is a single textual assignment consumed by the documentation
//! front end: `module.exports = <json>;`. The write is a plain full
//! overwrite with no atomic rename or backup, but unlike a log-and-forget
//! write it reports its outcome to the caller.

use compdoc_core::{Error, GenerationOutput, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

const MODULE_PREFIX: &str = "module.exports = ";

/// Renders a [`GenerationOutput`] as the exported data module text.
pub fn render_module(output: &GenerationOutput) -> Result<String> {
    let json =
        serde_json::to_string_pretty(output).map_err(|source| Error::Serialize { source })?;
    Ok(format!("{MODULE_PREFIX}{json};\n"))
}

/// Parses module text produced by [`render_module`] back into a
/// [`GenerationOutput`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text lacks the module frame or the JSON
/// payload does not deserialize.
pub fn parse_module(text: &str) -> Result<GenerationOutput> {
    let json = text
        .strip_prefix(MODULE_PREFIX)
        .and_then(|rest| rest.trim_end().strip_suffix(';'))
        .ok_or_else(|| Error::Parse {
            name: "componentData".to_string(),
            message: "missing `module.exports = ...;` frame".to_string(),
        })?;
    serde_json::from_str(json).map_err(|e| Error::Parse {
        name: "componentData".to_string(),
        message: e.to_string(),
    })
}

/// Overwrites the file at `path` with `text`, creating parent directories.
pub fn write_module(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote data module");
    Ok(())
}
