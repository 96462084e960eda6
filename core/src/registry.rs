// pipesmith/src/registry.rs

//! Defines `StepRegistry<H>`, the validated, ordered set of named steps and
//! their option lists that the combination engine expands.

use crate::core::option::StepOption;
use crate::core::step::StepDef;
use crate::error::{PipesmithResult, ValidationError};

use std::collections::HashMap;
use tracing::{event, Level};

/// An immutable, validated registry of steps.
///
/// Declaration order is preserved and defines the slot order of every
/// combination produced from this registry.
#[derive(Debug, Clone)]
pub struct StepRegistry<H> {
  steps: Vec<StepDef<H>>,
  index: HashMap<String, usize>,
}

impl<H> StepRegistry<H> {
  /// Builds a registry from ordered `(step name, options)` pairs.
  ///
  /// Fails with the first violation found, in declaration order:
  /// no steps at all, an empty or duplicate step name, a step without options,
  /// or a label with an empty key.
  pub fn new<S, I>(steps: I) -> PipesmithResult<Self>
  where
    S: Into<String>,
    I: IntoIterator<Item = (S, Vec<StepOption<H>>)>,
  {
    let steps: Vec<StepDef<H>> = steps
      .into_iter()
      .map(|(name, options)| StepDef::new(name, options))
      .collect();

    let index = validate_steps(&steps).map_err(|e| {
      event!(Level::WARN, error = %e, "Step registry validation failed.");
      e
    })?;

    event!(
      Level::DEBUG,
      num_steps = steps.len(),
      num_options = steps.iter().map(StepDef::len).sum::<usize>(),
      "Step registry built."
    );
    Ok(Self { steps, index })
  }

  /// Starts a fluent builder.
  pub fn builder() -> StepRegistryBuilder<H> {
    StepRegistryBuilder::new()
  }

  pub fn steps(&self) -> &[StepDef<H>] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  /// Always false for a constructed registry; present for API symmetry with `len`.
  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn step(&self, name: &str) -> Option<&StepDef<H>> {
    self.step_index(name).map(|i| &self.steps[i])
  }

  /// Position of the named step in declaration order.
  pub fn step_index(&self, name: &str) -> Option<usize> {
    self.index.get(name).copied()
  }

  pub fn step_names(&self) -> impl Iterator<Item = &str> + '_ {
    self.steps.iter().map(|s| s.name.as_str())
  }

  /// Size of the full Cartesian product. Saturates at `usize::MAX`.
  pub fn candidate_count(&self) -> usize {
    self
      .steps
      .iter()
      .fold(1usize, |acc, step| acc.saturating_mul(step.len()))
  }
}

fn validate_steps<H>(steps: &[StepDef<H>]) -> PipesmithResult<HashMap<String, usize>> {
  if steps.is_empty() {
    return Err(ValidationError::NoSteps);
  }

  let mut index: HashMap<String, usize> = HashMap::with_capacity(steps.len());
  for (step_index, step) in steps.iter().enumerate() {
    if step.name.is_empty() {
      return Err(ValidationError::EmptyStepName { step_index });
    }
    if let Some(&first_index) = index.get(&step.name) {
      return Err(ValidationError::DuplicateStep {
        step_name: step.name.clone(),
        step_index,
        first_index,
      });
    }
    if step.options.is_empty() {
      return Err(ValidationError::EmptyOptions {
        step_name: step.name.clone(),
      });
    }
    for (option_index, option) in step.options.iter().enumerate() {
      let has_empty_key = option
        .labels()
        .map_or(false, |labels| labels.keys().any(String::is_empty));
      if has_empty_key {
        return Err(ValidationError::EmptyLabelKey {
          step_name: step.name.clone(),
          option_index,
        });
      }
    }
    index.insert(step.name.clone(), step_index);
  }
  Ok(index)
}

/// Fluent builder for a `StepRegistry<H>`. Validation runs in `build`.
#[derive(Debug)]
pub struct StepRegistryBuilder<H> {
  steps: Vec<(String, Vec<StepOption<H>>)>,
}

impl<H> StepRegistryBuilder<H> {
  pub fn new() -> Self {
    Self { steps: Vec::new() }
  }

  /// Appends a step. Options accept anything convertible into `StepOption<H>`,
  /// including `Option<H>` where `None` is the empty selection.
  pub fn step<S, I, O>(mut self, name: S, options: I) -> Self
  where
    S: Into<String>,
    I: IntoIterator<Item = O>,
    O: Into<StepOption<H>>,
  {
    self
      .steps
      .push((name.into(), options.into_iter().map(Into::into).collect()));
    self
  }

  pub fn build(self) -> PipesmithResult<StepRegistry<H>> {
    StepRegistry::new(self.steps)
  }
}

impl<H> Default for StepRegistryBuilder<H> {
  fn default() -> Self {
    Self::new()
  }
}
