// tests/condition_tests.rs
mod common;

use common::*;
use pipesmith::{
  conditions_from_records, Condition, ConditionKind, ConditionRecord, LabelMatch, LabelValue, Labels, Pipesmith,
  ValidationError,
};

#[test]
fn test_condition_kind_parsing() {
  assert_eq!("require_if_label".parse::<ConditionKind>(), Ok(ConditionKind::RequireIfLabel));
  assert_eq!("skip_if_label".parse::<ConditionKind>(), Ok(ConditionKind::SkipIfLabel));
  assert_eq!(
    "require_if_present".parse::<ConditionKind>(),
    Ok(ConditionKind::RequireIfPresent)
  );
  assert_eq!(ConditionKind::SkipIfLabel.to_string(), "skip_if_label");
  assert!(!ConditionKind::RequireIfPresent.is_label_based());
}

#[test]
fn test_unknown_condition_kind_is_rejected() {
  setup_tracing();
  let records = vec![
    ConditionRecord::new("require_if_present", "sampler").with_steps(["vectorizer"]),
    ConditionRecord::new("forbid_if_label", "sampler").with_steps(["vectorizer"]),
  ];
  let err = conditions_from_records(records).unwrap_err();
  assert_eq!(
    err,
    ValidationError::UnknownConditionKind {
      condition_index: Some(1),
      kind: "forbid_if_label".to_string(),
    }
  );
}

#[test]
fn test_label_based_record_requires_label() {
  let err = Condition::try_from(ConditionRecord::new("skip_if_label", "sampler").with_steps(["clusterer"])).unwrap_err();
  assert!(matches!(
    err,
    ValidationError::MissingLabel { condition_index: None, ref kind } if kind == "skip_if_label"
  ));
}

#[test]
fn test_records_convert_to_typed_conditions() {
  let records = vec![
    ConditionRecord::new("skip_if_label", "sampler")
      .with_label(("independent", true))
      .with_steps(["vectorizer", "clusterer"]),
    ConditionRecord::new("require_if_label", "sampler")
      .with_label(("name", "top"))
      .with_steps(["vectorizer", "clusterer"]),
  ];
  let conditions = conditions_from_records(records).expect("records are well-formed");
  assert_eq!(conditions, scenario_conditions());
  assert_eq!(conditions[0].kind(), ConditionKind::SkipIfLabel);
  assert_eq!(conditions[0].target_step(), "sampler");
  assert_eq!(conditions[1].affected_steps(), ["vectorizer", "clusterer"]);
}

#[test]
fn test_require_if_present_record_ignores_label() {
  let condition = Condition::try_from(
    ConditionRecord::new("require_if_present", "clusterer")
      .with_label(("unused", 1))
      .with_steps(["vectorizer"]),
  )
  .unwrap();
  assert_eq!(condition, Condition::require_if_present("clusterer", ["vectorizer"]));
  assert_eq!(condition.label(), None);
}

#[test]
fn test_label_match_is_exact() {
  let mut labels = Labels::new();
  labels.insert("independent".to_string(), LabelValue::Bool(true));
  labels.insert("rank".to_string(), LabelValue::Int(1));

  assert!(LabelMatch::new("independent", true).matches(&labels));
  assert!(!LabelMatch::new("independent", false).matches(&labels));
  assert!(!LabelMatch::new("independent", "true").matches(&labels));
  assert!(!LabelMatch::new("rank", 1.0).matches(&labels));
  assert!(LabelMatch::new("rank", 1).matches(&labels));
  assert!(!LabelMatch::new("missing", true).matches(&labels));
}

#[test]
fn test_typo_in_target_step_is_rejected() {
  setup_tracing();
  let conditions = vec![Condition::skip_if_label(
    "sampeler",
    ("independent", true),
    ["vectorizer", "clusterer"],
  )];
  let err = Pipesmith::new(scenario_registry(), conditions).unwrap_err();
  assert_eq!(
    err,
    ValidationError::UnknownStep {
      condition_index: 0,
      field: "target_step",
      step_name: "sampeler".to_string(),
    }
  );
  assert!(err.to_string().contains("sampeler"));
}

#[test]
fn test_unknown_affected_step_names_field_and_index() {
  setup_tracing();
  let conditions = vec![
    Condition::require_if_present("vectorizer", ["clusterer"]),
    Condition::skip_if_label("sampler", ("independent", true), ["vectorizer", "reducer"]),
  ];
  let err = Pipesmith::new(scenario_registry(), conditions).unwrap_err();
  assert_eq!(
    err,
    ValidationError::UnknownStep {
      condition_index: 1,
      field: "skip_steps",
      step_name: "reducer".to_string(),
    }
  );

  let conditions = vec![Condition::require_if_label("sampler", ("name", "top"), ["reducer"])];
  let err = Pipesmith::new(scenario_registry(), conditions).unwrap_err();
  assert!(matches!(
    err,
    ValidationError::UnknownStep { condition_index: 0, field: "required_steps", .. }
  ));
}
