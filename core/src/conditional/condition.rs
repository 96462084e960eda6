// pipesmith/src/conditional/condition.rs

//! The declarative rules that decide whether a generated combination is kept.

use crate::core::label::LabelMatch;
use crate::error::{PipesmithResult, ValidationError};

use std::fmt;
use std::str::FromStr;

/// The three recognized condition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
  RequireIfLabel,
  SkipIfLabel,
  RequireIfPresent,
}

impl ConditionKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      ConditionKind::RequireIfLabel => "require_if_label",
      ConditionKind::SkipIfLabel => "skip_if_label",
      ConditionKind::RequireIfPresent => "require_if_present",
    }
  }

  pub fn is_label_based(&self) -> bool {
    !matches!(self, ConditionKind::RequireIfPresent)
  }
}

impl fmt::Display for ConditionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ConditionKind {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "require_if_label" => Ok(ConditionKind::RequireIfLabel),
      "skip_if_label" => Ok(ConditionKind::SkipIfLabel),
      "require_if_present" => Ok(ConditionKind::RequireIfPresent),
      other => Err(ValidationError::UnknownConditionKind {
        condition_index: None,
        kind: other.to_string(),
      }),
    }
  }
}

/// A condition over step presence and option labels.
///
/// Step names are checked against a registry when the condition list is
/// handed to `Pipesmith::new`, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
  /// When the option selected for `target_step` carries `label`, every step in
  /// `required_steps` must have a non-empty selection.
  RequireIfLabel {
    target_step: String,
    label: LabelMatch,
    required_steps: Vec<String>,
  },
  /// When the option selected for `target_step` carries `label`, every step in
  /// `skip_steps` must have the empty selection.
  SkipIfLabel {
    target_step: String,
    label: LabelMatch,
    skip_steps: Vec<String>,
  },
  /// When `target_step` has a non-empty selection, every step in
  /// `required_steps` must too.
  RequireIfPresent {
    target_step: String,
    required_steps: Vec<String>,
  },
}

impl Condition {
  pub fn require_if_label<T, L, I, S>(target_step: T, label: L, required_steps: I) -> Self
  where
    T: Into<String>,
    L: Into<LabelMatch>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Condition::RequireIfLabel {
      target_step: target_step.into(),
      label: label.into(),
      required_steps: required_steps.into_iter().map(Into::into).collect(),
    }
  }

  pub fn skip_if_label<T, L, I, S>(target_step: T, label: L, skip_steps: I) -> Self
  where
    T: Into<String>,
    L: Into<LabelMatch>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Condition::SkipIfLabel {
      target_step: target_step.into(),
      label: label.into(),
      skip_steps: skip_steps.into_iter().map(Into::into).collect(),
    }
  }

  pub fn require_if_present<T, I, S>(target_step: T, required_steps: I) -> Self
  where
    T: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Condition::RequireIfPresent {
      target_step: target_step.into(),
      required_steps: required_steps.into_iter().map(Into::into).collect(),
    }
  }

  pub fn kind(&self) -> ConditionKind {
    match self {
      Condition::RequireIfLabel { .. } => ConditionKind::RequireIfLabel,
      Condition::SkipIfLabel { .. } => ConditionKind::SkipIfLabel,
      Condition::RequireIfPresent { .. } => ConditionKind::RequireIfPresent,
    }
  }

  pub fn target_step(&self) -> &str {
    match self {
      Condition::RequireIfLabel { target_step, .. }
      | Condition::SkipIfLabel { target_step, .. }
      | Condition::RequireIfPresent { target_step, .. } => target_step,
    }
  }

  pub fn label(&self) -> Option<&LabelMatch> {
    match self {
      Condition::RequireIfLabel { label, .. } | Condition::SkipIfLabel { label, .. } => Some(label),
      Condition::RequireIfPresent { .. } => None,
    }
  }

  /// The steps the rule constrains: `required_steps` or `skip_steps`.
  pub fn affected_steps(&self) -> &[String] {
    match self {
      Condition::RequireIfLabel { required_steps, .. } | Condition::RequireIfPresent { required_steps, .. } => {
        required_steps
      }
      Condition::SkipIfLabel { skip_steps, .. } => skip_steps,
    }
  }

  /// Name of the field holding `affected_steps`, used in error reports.
  pub(crate) fn affected_field(&self) -> &'static str {
    match self {
      Condition::SkipIfLabel { .. } => "skip_steps",
      _ => "required_steps",
    }
  }
}

/// A loosely-typed condition, as it arrives from a config layer or a caller
/// that builds rules from strings.
///
/// `steps` holds `required_steps` or `skip_steps` depending on the kind.
/// A label on `require_if_present` is ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionRecord {
  pub kind: String,
  pub target_step: String,
  pub label: Option<LabelMatch>,
  pub steps: Vec<String>,
}

impl ConditionRecord {
  pub fn new(kind: impl Into<String>, target_step: impl Into<String>) -> Self {
    Self {
      kind: kind.into(),
      target_step: target_step.into(),
      ..Default::default()
    }
  }

  pub fn with_label(mut self, label: impl Into<LabelMatch>) -> Self {
    self.label = Some(label.into());
    self
  }

  pub fn with_steps<I, S>(mut self, steps: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.steps = steps.into_iter().map(Into::into).collect();
    self
  }
}

impl TryFrom<ConditionRecord> for Condition {
  type Error = ValidationError;

  fn try_from(record: ConditionRecord) -> PipesmithResult<Self> {
    let kind: ConditionKind = record.kind.parse()?;
    let ConditionRecord {
      target_step,
      label,
      steps,
      ..
    } = record;

    let require_label = || {
      label.clone().ok_or_else(|| ValidationError::MissingLabel {
        condition_index: None,
        kind: kind.as_str().to_string(),
      })
    };

    Ok(match kind {
      ConditionKind::RequireIfLabel => Condition::RequireIfLabel {
        label: require_label()?,
        target_step,
        required_steps: steps,
      },
      ConditionKind::SkipIfLabel => Condition::SkipIfLabel {
        label: require_label()?,
        target_step,
        skip_steps: steps,
      },
      ConditionKind::RequireIfPresent => Condition::RequireIfPresent {
        target_step,
        required_steps: steps,
      },
    })
  }
}

/// Converts a list of records, tagging any failure with the record's position.
pub fn conditions_from_records<I>(records: I) -> PipesmithResult<Vec<Condition>>
where
  I: IntoIterator<Item = ConditionRecord>,
{
  records
    .into_iter()
    .enumerate()
    .map(|(i, record)| Condition::try_from(record).map_err(|e| e.at_condition(i)))
    .collect()
}
