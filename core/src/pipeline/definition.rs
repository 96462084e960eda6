// pipesmith/src/pipeline/definition.rs

//! Contains the `Pipesmith<H>` struct definition: a validated step registry
//! plus the conditions that filter its product.

use crate::conditional::condition::Condition;
use crate::conditional::evaluate::ResolvedCondition;
use crate::core::option::StepOption;
use crate::error::{PipesmithResult, ValidationError};
use crate::registry::StepRegistry;

use tracing::{event, Level};

/// The combination engine.
///
/// Both the registry and the condition list are fixed at construction, and
/// every condition has already been checked against the registry's step names,
/// so querying never fails.
#[derive(Debug, Clone)]
pub struct Pipesmith<H> {
  pub(crate) registry: StepRegistry<H>,
  conditions: Vec<Condition>,
  pub(crate) resolved: Vec<ResolvedCondition>,
}

impl<H> Pipesmith<H> {
  /// Creates an engine over `registry` filtered by `conditions`.
  ///
  /// Fails with `ValidationError::UnknownStep` (naming the condition index and
  /// field) if any condition references a step the registry does not declare.
  pub fn new<I>(registry: StepRegistry<H>, conditions: I) -> PipesmithResult<Self>
  where
    I: IntoIterator<Item = Condition>,
  {
    let conditions: Vec<Condition> = conditions.into_iter().collect();
    let resolved = conditions
      .iter()
      .enumerate()
      .map(|(i, c)| ResolvedCondition::resolve(c, i, &registry))
      .collect::<PipesmithResult<Vec<_>>>()
      .map_err(|e| {
        event!(Level::WARN, error = %e, "Condition validation failed.");
        e
      })?;

    event!(
      Level::DEBUG,
      num_steps = registry.len(),
      num_conditions = conditions.len(),
      candidates = registry.candidate_count(),
      "Pipesmith engine built."
    );
    Ok(Self {
      registry,
      conditions,
      resolved,
    })
  }

  /// An engine with no conditions: every candidate survives.
  pub fn unconditioned(registry: StepRegistry<H>) -> Self {
    Self {
      registry,
      conditions: Vec::new(),
      resolved: Vec::new(),
    }
  }

  pub fn registry(&self) -> &StepRegistry<H> {
    &self.registry
  }

  pub fn conditions(&self) -> &[Condition] {
    &self.conditions
  }

  /// Position of the named step; `None` if it was never declared.
  pub fn step_index(&self, step_name: &str) -> Option<usize> {
    self.registry.step_index(step_name)
  }

  /// Size of the unfiltered product. Saturates at `usize::MAX`.
  pub fn candidate_count(&self) -> usize {
    self.registry.candidate_count()
  }

  /// Evaluates the conditions against an explicit selection, given as one
  /// option index per step in declaration order.
  pub fn is_valid_combination(&self, selection: &[usize]) -> PipesmithResult<bool> {
    let steps = self.registry.steps();
    if selection.len() != steps.len() {
      return Err(ValidationError::InvalidSelection {
        expected_len: steps.len(),
        actual_len: selection.len(),
      });
    }
    for (step, &option_index) in steps.iter().zip(selection) {
      if option_index >= step.len() {
        return Err(ValidationError::OptionOutOfRange {
          step_name: step.name.clone(),
          option_index,
          available: step.len(),
        });
      }
    }
    Ok(self.first_failing_condition(selection).is_none())
  }

  /// Index of the first condition the candidate fails, if any.
  /// `indices` must already be in range for every step.
  pub(crate) fn first_failing_condition(&self, indices: &[usize]) -> Option<usize> {
    if self.resolved.is_empty() {
      return None;
    }
    let selected: Vec<&StepOption<H>> = self
      .registry
      .steps()
      .iter()
      .zip(indices)
      .map(|(step, &i)| &step.options[i])
      .collect();
    self.resolved.iter().position(|c| !c.passes(&selected))
  }
}
