//! Static extraction of component documentation metadata.
//!
//! Given the raw text of a component (or example) source file, this crate
//! parses it with `syn` and derives a description and a prop list without
//! compiling or executing anything.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod extractor;
mod props;

pub use extractor::{extract, ComponentDoc};
