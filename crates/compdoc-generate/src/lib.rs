//! Generation pipeline for compdoc.
//!
//! One run flows strictly one way: enumerate component directories, extract
//! metadata per component and example, aggregate into a
//! [`GenerationOutput`](compdoc_core::GenerationOutput), render the data
//! module, write it. Nothing is kept between runs.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod scan;
pub mod serialize;

pub use generator::{Generator, RunReport};
pub use serialize::{parse_module, render_module, write_module};
