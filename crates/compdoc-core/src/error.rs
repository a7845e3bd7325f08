//! Error types for compdoc.
//!
//! All failure categories of the generation pipeline live here: file reads,
//! directory scans, source parsing, serialization, and the output write.
//! Every operation in the pipeline reports through [`Result`] so callers
//! (including the watch loop) can act on failures instead of losing them in
//! a log line.
//!
//! # Examples
//!
//! ```
//! use compdoc_core::{Error, Result};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::Parse {
//!             name: "<unnamed>".to_string(),
//!             message: "empty component name".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_name("").unwrap_err();
//! assert!(err.is_parse_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the compdoc pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be enumerated.
    ///
    /// This aborts the whole run: enumeration failures are not contained at
    /// the per-component boundary.
    #[error("failed to scan directory {path}")]
    Scan {
        /// Path of the directory that could not be listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Source text could not be analyzed.
    ///
    /// Raised when a component or example file is syntactically invalid or
    /// contains no recognizable component definition.
    #[error("failed to parse {name}: {message}")]
    Parse {
        /// Component or example name the source belongs to
        name: String,
        /// Description of the parse failure
        message: String,
    },

    /// A component directory has no matching source file.
    ///
    /// By convention `<components>/<Name>/` must contain `<Name>.rs`.
    #[error("no source file for component `{component}` at {path}")]
    MissingSource {
        /// Name of the component directory
        component: String,
        /// Expected path of the source file
        path: PathBuf,
    },

    /// The aggregate could not be rendered to JSON.
    #[error("failed to serialize component data")]
    Serialize {
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// The output module could not be written.
    #[error("failed to write {path}")]
    Write {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a parse error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` if this is a directory scan error.
    #[must_use]
    pub const fn is_scan_error(&self) -> bool {
        matches!(self, Self::Scan { .. })
    }

    /// Returns `true` if this is an output write error.
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    /// Returns `true` if this is a missing component source error.
    #[must_use]
    pub const fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSource { .. })
    }
}

/// Result type alias used throughout the compdoc crates.
pub type Result<T> = std::result::Result<T, Error>;
