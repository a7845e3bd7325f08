//! Generator configuration.
//!
//! All paths the pipeline touches are carried explicitly in
//! [`GeneratorConfig`] and passed into the entry point; there are no
//! process-wide path constants.
//!
//! # Examples
//!
//! ```
//! use compdoc_core::GeneratorConfig;
//! use std::path::PathBuf;
//!
//! // Conventional project layout
//! let config = GeneratorConfig::default();
//! assert_eq!(config.components_root, PathBuf::from("src/components"));
//!
//! // Custom layout
//! let custom = GeneratorConfig {
//!     components_root: PathBuf::from("sample/components"),
//!     ..Default::default()
//! };
//! ```

use std::path::{Path, PathBuf};

/// Filesystem layout for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory whose immediate child directories are components.
    ///
    /// Each child `<Name>/` must contain `<Name>.rs`.
    /// Default: `src/components`
    pub components_root: PathBuf,

    /// Directory holding per-component example directories.
    ///
    /// `<examples_root>/<Name>/` holds zero or more example files; a missing
    /// directory is a warning, not an error.
    /// Default: `src/docs/examples`
    pub examples_root: PathBuf,

    /// Path of the generated data module. Overwritten in full on every run.
    ///
    /// Default: `config/componentData.js`
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    /// Path of a component's source file: `<components_root>/<name>/<name>.rs`.
    #[must_use]
    pub fn component_source(&self, name: &str) -> PathBuf {
        self.components_root.join(name).join(format!("{name}.rs"))
    }

    /// Path of a component's examples directory: `<examples_root>/<name>`.
    #[must_use]
    pub fn example_dir(&self, name: &str) -> PathBuf {
        self.examples_root.join(name)
    }

    /// Path of one example file inside a component's examples directory.
    #[must_use]
    pub fn example_source(&self, name: &str, file: impl AsRef<Path>) -> PathBuf {
        self.example_dir(name).join(file)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            components_root: PathBuf::from("src/components"),
            examples_root: PathBuf::from("src/docs/examples"),
            output_path: PathBuf::from("config/componentData.js"),
        }
    }
}
