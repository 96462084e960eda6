// pipesmith/src/core/step.rs

//! Defines the structure for a single step within a registry.

use super::option::StepOption;

/// Definition of a step: its name and the ordered options it can take.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDef<H> {
  pub name: String,
  pub options: Vec<StepOption<H>>,
}

impl<H> StepDef<H> {
  pub fn new(name: impl Into<String>, options: Vec<StepOption<H>>) -> Self {
    Self {
      name: name.into(),
      options,
    }
  }

  pub fn len(&self) -> usize {
    self.options.len()
  }

  pub fn is_empty(&self) -> bool {
    self.options.is_empty()
  }
}
