// pipesmith/src/error.rs
use thiserror::Error;

/// Raised when steps, options, conditions or an explicit selection are malformed.
///
/// Every variant names the element that broke the rule, so a caller can point
/// at the exact step, option or condition in their own input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
  #[error("At least one step must be declared")]
  NoSteps,

  #[error("Step at index {step_index} has an empty name")]
  EmptyStepName { step_index: usize },

  #[error("Duplicate step name '{step_name}' at index {step_index} (first declared at index {first_index})")]
  DuplicateStep {
    step_name: String,
    step_index: usize,
    first_index: usize,
  },

  #[error("Step '{step_name}' has no options")]
  EmptyOptions { step_name: String },

  #[error("Option {option_index} of step '{step_name}' has a label with an empty key")]
  EmptyLabelKey { step_name: String, option_index: usize },

  #[error("Unrecognized condition kind '{kind}' (condition index: {condition_index:?})")]
  UnknownConditionKind {
    condition_index: Option<usize>,
    kind: String,
  },

  #[error("Condition {condition_index} references unknown step '{step_name}' in '{field}'")]
  UnknownStep {
    condition_index: usize,
    field: &'static str,
    step_name: String,
  },

  #[error("Condition of kind '{kind}' requires a label (condition index: {condition_index:?})")]
  MissingLabel {
    condition_index: Option<usize>,
    kind: String,
  },

  #[error("Selection has {actual_len} entries, expected one per step ({expected_len})")]
  InvalidSelection { expected_len: usize, actual_len: usize },

  #[error("Option index {option_index} is out of range for step '{step_name}' ({available} options)")]
  OptionOutOfRange {
    step_name: String,
    option_index: usize,
    available: usize,
  },
}

impl ValidationError {
  /// Attaches the position of the condition inside its list, for errors raised
  /// while a single record was converted on its own.
  pub(crate) fn at_condition(self, index: usize) -> Self {
    match self {
      ValidationError::UnknownConditionKind { kind, .. } => ValidationError::UnknownConditionKind {
        condition_index: Some(index),
        kind,
      },
      ValidationError::MissingLabel { kind, .. } => ValidationError::MissingLabel {
        condition_index: Some(index),
        kind,
      },
      other => other,
    }
  }
}

pub type PipesmithResult<T, E = ValidationError> = std::result::Result<T, E>;
