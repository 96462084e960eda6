// tests/registry_tests.rs
mod common;

use common::*;
use pipesmith::{LabelValue, Labels, StepOption, StepRegistry, ValidationError};

#[test]
fn test_registry_preserves_declaration_order() {
  setup_tracing();
  let registry = scenario_registry();

  let names: Vec<&str> = registry.step_names().collect();
  assert_eq!(names, vec!["vectorizer", "clusterer", "sampler"]);
  assert_eq!(registry.len(), 3);
  assert_eq!(registry.step_index("clusterer"), Some(1));
  assert_eq!(registry.step_index("sampeler"), None);
  assert_eq!(registry.candidate_count(), 18);
}

#[test]
fn test_registry_normalizes_option_shapes() {
  setup_tracing();
  let mut labels = Labels::new();
  labels.insert("independent".to_string(), LabelValue::Bool(true));

  let registry = StepRegistry::new(vec![(
    "sampler",
    vec![
      StepOption::Empty,
      StepOption::handle("bare"),
      StepOption::labeled("tagged", labels.clone()),
    ],
  )])
  .expect("valid registry");

  let options = &registry.step("sampler").unwrap().options;
  assert!(options[0].is_empty());
  assert_eq!(options[0].labels(), None);
  assert_eq!(options[1].handle_ref(), Some(&"bare"));
  assert_eq!(options[1].labels(), Some(&Labels::new()));
  assert_eq!(options[2].labels(), Some(&labels));
}

#[test]
fn test_with_label_on_empty_is_noop() {
  let opt: StepOption<&str> = StepOption::Empty.with_label("k", "v");
  assert_eq!(opt, StepOption::Empty);
}

#[test]
fn test_registry_keeps_repeated_empty_options() {
  setup_tracing();
  let registry = StepRegistry::builder()
    .step("a", [None, Some(1u8), None])
    .build()
    .expect("repeated empty options are allowed");
  assert_eq!(registry.step("a").unwrap().len(), 3);
  assert_eq!(registry.candidate_count(), 3);
}

#[test]
fn test_registry_rejects_no_steps() {
  setup_tracing();
  let result = StepRegistry::<u8>::builder().build();
  assert_eq!(result.unwrap_err(), ValidationError::NoSteps);
}

#[test]
fn test_registry_rejects_duplicate_step_names() {
  setup_tracing();
  let result = StepRegistry::builder()
    .step("a", [Some(1)])
    .step("b", [Some(2)])
    .step("a", [Some(3)])
    .build();
  assert_eq!(
    result.unwrap_err(),
    ValidationError::DuplicateStep {
      step_name: "a".to_string(),
      step_index: 2,
      first_index: 0,
    }
  );
}

#[test]
fn test_registry_rejects_empty_option_list() {
  setup_tracing();
  let result = StepRegistry::new(vec![("a", vec![StepOption::handle(1)]), ("b", Vec::new())]);
  match result {
    Err(ValidationError::EmptyOptions { step_name }) => assert_eq!(step_name, "b"),
    other => panic!("Expected EmptyOptions, got {:?}", other),
  }
}

#[test]
fn test_registry_rejects_empty_step_name() {
  setup_tracing();
  let result = StepRegistry::builder().step("ok", [Some(1)]).step("", [Some(2)]).build();
  assert_eq!(result.unwrap_err(), ValidationError::EmptyStepName { step_index: 1 });
}

#[test]
fn test_registry_rejects_empty_label_key() {
  setup_tracing();
  let result = StepRegistry::builder()
    .step("a", [StepOption::handle(1), StepOption::handle(2).with_label("", 5)])
    .build();
  let err = result.unwrap_err();
  assert_eq!(
    err,
    ValidationError::EmptyLabelKey {
      step_name: "a".to_string(),
      option_index: 1,
    }
  );
  assert!(err.to_string().contains("Option 1 of step 'a'"));
}
