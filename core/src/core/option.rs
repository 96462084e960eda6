// pipesmith/src/core/option.rs

//! Defines `StepOption<H>`, one selectable choice for a step.

use super::label::{LabelValue, Labels};

/// One choice inside a step's option list.
///
/// `H` is the caller's handle type. The engine never invokes or inspects a
/// handle; it only distinguishes a real selection from `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOption<H> {
  /// No selection for this step.
  Empty,
  /// A real handle together with its (possibly empty) label-set.
  Present { handle: H, labels: Labels },
}

impl<H> StepOption<H> {
  /// A bare handle with no labels.
  pub fn handle(handle: H) -> Self {
    StepOption::Present {
      handle,
      labels: Labels::new(),
    }
  }

  /// A handle with the given label-set.
  pub fn labeled(handle: H, labels: Labels) -> Self {
    StepOption::Present { handle, labels }
  }

  /// Adds one label to a present option. A no-op on `Empty`, which carries no labels.
  pub fn with_label(mut self, key: impl Into<String>, value: impl Into<LabelValue>) -> Self {
    if let StepOption::Present { labels, .. } = &mut self {
      labels.insert(key.into(), value.into());
    }
    self
  }

  pub fn is_empty(&self) -> bool {
    matches!(self, StepOption::Empty)
  }

  pub fn is_present(&self) -> bool {
    !self.is_empty()
  }

  pub fn handle_ref(&self) -> Option<&H> {
    match self {
      StepOption::Empty => None,
      StepOption::Present { handle, .. } => Some(handle),
    }
  }

  /// Labels of a present option; `None` for `Empty`.
  pub fn labels(&self) -> Option<&Labels> {
    match self {
      StepOption::Empty => None,
      StepOption::Present { labels, .. } => Some(labels),
    }
  }
}

impl<H> From<Option<H>> for StepOption<H> {
  fn from(opt: Option<H>) -> Self {
    match opt {
      Some(handle) => StepOption::handle(handle),
      None => StepOption::Empty,
    }
  }
}
