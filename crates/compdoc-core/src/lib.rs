//! Core types for the compdoc component documentation generator.
//!
//! This crate holds the data model shared by the extractor, the generation
//! pipeline, and the CLI: component and example records, the generator
//! configuration, and the error taxonomy.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod record;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use record::{ComponentRecord, ExampleRecord, GenerationOutput, PropInfo};
pub use types::ComponentName;
