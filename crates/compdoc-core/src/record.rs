//! Records produced by one generation run.
//!
//! Every run builds these fresh from the filesystem and discards them after
//! serialization; nothing here is persisted between runs.
//!
//! # Examples
//!
//! ```
//! use compdoc_core::{ComponentName, ComponentRecord, GenerationOutput};
//! use std::collections::BTreeMap;
//!
//! let record = ComponentRecord {
//!     name: ComponentName::new("Button"),
//!     description: "A pressable control.".to_string(),
//!     props: BTreeMap::new(),
//!     code: String::new(),
//!     examples: vec![],
//! };
//!
//! let output = GenerationOutput {
//!     records: vec![record],
//!     errors: vec![],
//! };
//! assert!(output.is_clean());
//! ```

use crate::types::ComponentName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata for a single documented prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropInfo {
    /// Rendered type of the prop. For `Option<T>` props this is `T`.
    pub type_name: String,
    /// Whether the prop must be supplied by the caller.
    pub required: bool,
    /// Doc comment attached to the prop, if any.
    #[serde(default)]
    pub description: String,
}

/// One usage example of a component.
///
/// By convention the component declared inside the example's source matches
/// `name`; the pipeline does not validate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecord {
    /// Example filename minus its extension.
    pub name: String,
    /// Doc comment of the example's component definition.
    pub description: String,
    /// Raw source text of the example file.
    pub code: String,
}

/// Documentation metadata for one component, with its examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Component name (directory name under the components root).
    pub name: ComponentName,
    /// Doc comment of the component definition.
    pub description: String,
    /// Documented props, keyed by prop name. `BTreeMap` keeps the rendered
    /// output deterministic across runs.
    pub props: BTreeMap<String, PropInfo>,
    /// Raw source text of the component file.
    pub code: String,
    /// Usage examples, in filename order.
    pub examples: Vec<ExampleRecord>,
}

/// Aggregate result of one generation run.
///
/// Partial success is representable: a failing component contributes a
/// formatted message to `errors` while every component that did parse keeps
/// its record. A run with no failures has an empty `errors` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// Successfully generated component records, in directory order.
    pub records: Vec<ComponentRecord>,
    /// Formatted messages for every component or example that failed.
    pub errors: Vec<String>,
}

impl GenerationOutput {
    /// Returns `true` if the run produced no errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of examples across all records.
    #[must_use]
    pub fn example_count(&self) -> usize {
        self.records.iter().map(|r| r.examples.len()).sum()
    }
}
