//! End-to-end tests for the generation pipeline.
//!
//! Fixture component trees are laid out in temp directories the same way a
//! real project is: `components/<Name>/<Name>.rs` next to
//! `examples/<Name>/<Example>.rs`.

use compdoc_core::GeneratorConfig;
use compdoc_generate::{parse_module, Generator};
use std::fs;
use tempfile::TempDir;

const BUTTON: &str = r#"
/// A pressable control.
#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    /// Visible label.
    pub label: String,
    /// Disables interaction when set.
    pub disabled: Option<bool>,
}

/// A pressable control.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! { button { "{props.label}" } }
}
"#;

const CARD: &str = r#"
/// A bordered content container.
#[component]
pub fn Card(title: String, elevated: Option<bool>) -> Element {
    rsx! { div { "{title}" } }
}
"#;

const CARD_BASIC_EXAMPLE: &str = r#"
/// Minimal card with only a title.
#[component]
pub fn Basic() -> Element {
    rsx! { Card { title: "Hello" } }
}
"#;

const UNPARSABLE: &str = "pub fn {{{ not rust";

struct Fixture {
    _dir: TempDir,
    config: GeneratorConfig,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig {
            components_root: dir.path().join("components"),
            examples_root: dir.path().join("examples"),
            output_path: dir.path().join("config").join("componentData.js"),
        };
        fs::create_dir_all(&config.components_root).unwrap();
        fs::create_dir_all(&config.examples_root).unwrap();
        Self { _dir: dir, config }
    }

    fn add_component(&self, name: &str, source: &str) {
        let dir = self.config.components_root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.rs")), source).unwrap();
    }

    fn add_example(&self, component: &str, file: &str, source: &str) {
        let dir = self.config.examples_root.join(component);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), source).unwrap();
    }

    fn generator(&self) -> Generator {
        Generator::new(self.config.clone())
    }
}

fn read_output(config: &GeneratorConfig) -> String {
    fs::read_to_string(&config.output_path).unwrap()
}

#[test]
fn component_without_examples_gets_empty_list() {
    let fx = Fixture::new();
    fx.add_component("Button", BUTTON);

    let report = fx.generator().run().unwrap();
    assert_eq!(report.record_count, 1);
    assert_eq!(report.example_count, 0);
    assert_eq!(report.error_count, 0);

    let output = parse_module(&read_output(&fx.config)).unwrap();
    assert_eq!(output.records[0].name.as_str(), "Button");
    assert!(output.records[0].examples.is_empty());
}

#[test]
fn examples_are_named_after_files_and_sorted() {
    let fx = Fixture::new();
    fx.add_component("Card", CARD);
    fx.add_example("Card", "WithHeader.rs", CARD_BASIC_EXAMPLE);
    fx.add_example("Card", "Basic.rs", CARD_BASIC_EXAMPLE);

    let output = fx
        .generator()
        .build_all(&["Card".to_string()]);
    let names: Vec<&str> = output.records[0]
        .examples
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Basic", "WithHeader"]);
}

#[test]
fn button_and_card_scenario() {
    let fx = Fixture::new();
    fx.add_component("Button", BUTTON);
    fx.add_component("Card", CARD);
    fx.add_example("Card", "Basic.rs", CARD_BASIC_EXAMPLE);

    let report = fx.generator().run().unwrap();
    assert_eq!(report.record_count, 2);
    assert_eq!(report.example_count, 1);
    assert_eq!(report.error_count, 0);

    let output = parse_module(&read_output(&fx.config)).unwrap();
    // Directory order: Button before Card.
    assert_eq!(output.records[0].name.as_str(), "Button");
    assert!(output.records[0].examples.is_empty());
    assert_eq!(output.records[1].name.as_str(), "Card");
    assert_eq!(output.records[1].examples.len(), 1);
    assert_eq!(output.records[1].examples[0].name, "Basic");
    assert_eq!(
        output.records[1].examples[0].description,
        "Minimal card with only a title."
    );
}

#[test]
fn failing_component_keeps_other_records() {
    let fx = Fixture::new();
    fx.add_component("Button", BUTTON);
    fx.add_component("Card", UNPARSABLE);

    let report = fx.generator().run().unwrap();
    assert_eq!(report.record_count, 1);
    assert_eq!(report.error_count, 1);

    let output = parse_module(&read_output(&fx.config)).unwrap();
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].name.as_str(), "Button");
    assert_eq!(output.errors.len(), 1);
    assert!(output.errors[0].contains("Card"));
}

#[test]
fn failing_example_fails_only_that_example() {
    let fx = Fixture::new();
    fx.add_component("Card", CARD);
    fx.add_example("Card", "Basic.rs", CARD_BASIC_EXAMPLE);
    fx.add_example("Card", "Broken.rs", UNPARSABLE);

    let output = fx.generator().build_all(&["Card".to_string()]);
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].examples.len(), 1);
    assert_eq!(output.records[0].examples[0].name, "Basic");
    assert_eq!(output.errors.len(), 1);
    assert!(output.errors[0].contains("Broken"));
    assert!(output.errors[0].contains("Card"));
}

#[test]
fn missing_component_source_is_one_error() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.config.components_root.join("Ghost")).unwrap();

    let output = fx.generator().build_all(&["Ghost".to_string()]);
    assert!(output.records.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert!(output.errors[0].contains("Ghost"));
}

#[test]
fn component_record_carries_code_and_props() {
    let fx = Fixture::new();
    fx.add_component("Button", BUTTON);

    let (record, errors) = fx.generator().build_component("Button").unwrap();
    assert!(errors.is_empty());
    assert_eq!(record.description, "A pressable control.");
    assert_eq!(record.code, BUTTON);
    assert!(record.props["label"].required);
    assert_eq!(record.props["label"].description, "Visible label.");
    assert!(!record.props["disabled"].required);
    assert_eq!(record.props["disabled"].type_name, "bool");
}

#[test]
fn output_round_trips_through_module_text() {
    let fx = Fixture::new();
    fx.add_component("Button", BUTTON);
    fx.add_component("Card", CARD);
    fx.add_example("Card", "Basic.rs", CARD_BASIC_EXAMPLE);

    fx.generator().run().unwrap();
    let first = parse_module(&read_output(&fx.config)).unwrap();

    fx.generator().run().unwrap();
    let second = parse_module(&read_output(&fx.config)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.records.len(), 2);
    assert_eq!(first.example_count(), 1);
}

#[test]
fn missing_components_root_aborts_run() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        components_root: dir.path().join("does-not-exist"),
        examples_root: dir.path().join("examples"),
        output_path: dir.path().join("componentData.js"),
    };
    let err = Generator::new(config.clone()).run().unwrap_err();
    assert!(err.is_scan_error());
    assert!(!config.output_path.exists());
}

#[test]
fn successive_runs_overwrite_output_in_full() {
    let fx = Fixture::new();
    fx.add_component("Button", BUTTON);
    fx.add_component("Card", CARD);
    fx.generator().run().unwrap();
    let long = read_output(&fx.config);

    fs::remove_dir_all(fx.config.components_root.join("Card")).unwrap();
    fx.generator().run().unwrap();
    let short = read_output(&fx.config);

    assert!(short.len() < long.len());
    let output = parse_module(&short).unwrap();
    assert_eq!(output.records.len(), 1);
}
