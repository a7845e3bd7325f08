//! The generation pipeline.
//!
//! [`Generator`] ties the pieces together: enumerate component directories,
//! build one record per component, aggregate records and error messages into
//! a [`GenerationOutput`], render and write the data module.
//!
//! Failure containment follows the documented policy:
//!
//! - a failing *component* (unreadable or unparsable source, missing source
//!   file) is converted to one formatted error string; other components keep
//!   their records,
//! - a failing *example* is skipped with one formatted error string; its
//!   component keeps the examples that did parse,
//! - a failing directory *scan* or output *write* aborts the run and is
//!   returned to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use compdoc_core::GeneratorConfig;
//! use compdoc_generate::Generator;
//!
//! # fn main() -> compdoc_core::Result<()> {
//! let generator = Generator::new(GeneratorConfig::default());
//! let report = generator.run()?;
//! println!("{} components documented", report.record_count);
//! # Ok(())
//! # }
//! ```

use crate::{scan, serialize};
use compdoc_core::{
    ComponentName, ComponentRecord, Error, ExampleRecord, GenerationOutput, GeneratorConfig,
    Result,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of one completed generation run, for console reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of component records in the output.
    pub record_count: usize,
    /// Number of examples across all records.
    pub example_count: usize,
    /// Number of collected error messages.
    pub error_count: usize,
    /// Where the data module was written.
    pub output_path: PathBuf,
}

/// Runs the scan → extract → aggregate → write pipeline.
///
/// Holds only the configuration; every call to [`Generator::run`] recomputes
/// everything from the filesystem.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator for the given layout.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator runs against.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Performs one full generation run and writes the data module.
    ///
    /// # Errors
    ///
    /// Returns an error if the components root cannot be enumerated or the
    /// output cannot be rendered or written. Per-component and per-example
    /// failures do not fail the run; they end up in the output's error list.
    pub fn run(&self) -> Result<RunReport> {
        let names = scan::component_dirs(&self.config.components_root)?;
        debug!(components = names.len(), "scanned components root");

        let output = self.build_all(&names);
        let text = serialize::render_module(&output)?;
        serialize::write_module(&self.config.output_path, &text)?;

        let report = RunReport {
            record_count: output.records.len(),
            example_count: output.example_count(),
            error_count: output.errors.len(),
            output_path: self.config.output_path.clone(),
        };
        info!(
            records = report.record_count,
            examples = report.example_count,
            errors = report.error_count,
            "component data saved"
        );
        Ok(report)
    }

    /// Builds records for every named component, collecting failures as
    /// formatted messages instead of aborting.
    #[must_use]
    pub fn build_all(&self, names: &[String]) -> GenerationOutput {
        let mut records = Vec::new();
        let mut errors = Vec::new();
        for name in names {
            match self.build_component(name) {
                Ok((record, mut example_errors)) => {
                    records.push(record);
                    errors.append(&mut example_errors);
                }
                Err(err) => {
                    warn!(component = name.as_str(), error = %err, "component failed");
                    errors.push(format!("failed to generate metadata for `{name}`: {err}"));
                }
            }
        }
        GenerationOutput { records, errors }
    }

    /// Builds one component record plus the error messages of any examples
    /// that failed to parse.
    ///
    /// # Errors
    ///
    /// Returns an error if the component's own source is missing, unreadable,
    /// or unparsable, or if its examples directory cannot be enumerated.
    pub fn build_component(&self, name: &str) -> Result<(ComponentRecord, Vec<String>)> {
        let path = self.config.component_source(name);
        if !path.is_file() {
            return Err(Error::MissingSource {
                component: name.to_string(),
                path,
            });
        }
        let code = read_source(&path)?;
        let doc = compdoc_extract::extract(name, &code)?;
        let (examples, example_errors) = self.build_examples(name)?;

        Ok((
            ComponentRecord {
                name: ComponentName::new(name),
                description: doc.description,
                props: doc.props,
                code,
                examples,
            },
            example_errors,
        ))
    }

    /// Builds the example list for one component.
    ///
    /// An unparsable example fails only that example: it is skipped and a
    /// formatted message collected, while the rest of the list survives.
    fn build_examples(&self, component: &str) -> Result<(Vec<ExampleRecord>, Vec<String>)> {
        let files = scan::example_files(&self.config.examples_root, component)?;
        let mut examples = Vec::new();
        let mut errors = Vec::new();
        for file in &files {
            // By convention the declared component matches the filename, so
            // the name is the filename minus its extension.
            let name = Path::new(file)
                .file_stem()
                .map_or_else(|| file.clone(), |s| s.to_string_lossy().into_owned());
            match self.build_example(&name, component, file) {
                Ok(example) => examples.push(example),
                Err(err) => {
                    warn!(component, example = name.as_str(), error = %err, "example failed");
                    errors.push(format!(
                        "failed to generate metadata for example `{name}` of `{component}`: {err}"
                    ));
                }
            }
        }
        Ok((examples, errors))
    }

    fn build_example(&self, name: &str, component: &str, file: &str) -> Result<ExampleRecord> {
        let path = self.config.example_source(component, file);
        let code = read_source(&path)?;
        let doc = compdoc_extract::extract(name, &code)?;
        Ok(ExampleRecord {
            name: name.to_string(),
            description: doc.description,
            code,
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
