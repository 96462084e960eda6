// pipesmith/src/conditional/evaluate.rs

//! Conditions resolved against a registry: step names become indices once, at
//! construction, so evaluating a candidate is index lookups only.

use super::condition::Condition;
use crate::core::label::LabelMatch;
use crate::core::option::StepOption;
use crate::error::{PipesmithResult, ValidationError};
use crate::registry::StepRegistry;

/// What makes a condition fire for a candidate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Trigger {
  /// The target's selection is present and carries the label.
  Label { target: usize, label: LabelMatch },
  /// The target's selection is present.
  Present { target: usize },
}

/// What a fired condition demands of the candidate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Effect {
  RequirePresent(Vec<usize>),
  RequireEmpty(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedCondition {
  pub(crate) trigger: Trigger,
  pub(crate) effect: Effect,
}

impl ResolvedCondition {
  pub(crate) fn resolve<H>(
    condition: &Condition,
    condition_index: usize,
    registry: &StepRegistry<H>,
  ) -> PipesmithResult<Self> {
    let lookup = |field: &'static str, name: &str| {
      registry.step_index(name).ok_or_else(|| ValidationError::UnknownStep {
        condition_index,
        field,
        step_name: name.to_string(),
      })
    };

    let target = lookup("target_step", condition.target_step())?;
    let affected = condition
      .affected_steps()
      .iter()
      .map(|name| lookup(condition.affected_field(), name))
      .collect::<PipesmithResult<Vec<usize>>>()?;

    let (trigger, effect) = match condition {
      Condition::RequireIfLabel { label, .. } => (
        Trigger::Label {
          target,
          label: label.clone(),
        },
        Effect::RequirePresent(affected),
      ),
      Condition::SkipIfLabel { label, .. } => (
        Trigger::Label {
          target,
          label: label.clone(),
        },
        Effect::RequireEmpty(affected),
      ),
      Condition::RequireIfPresent { .. } => (Trigger::Present { target }, Effect::RequirePresent(affected)),
    };
    Ok(Self { trigger, effect })
  }

  /// `selected` holds one option per step, in registry order.
  pub(crate) fn fires<H>(&self, selected: &[&StepOption<H>]) -> bool {
    match &self.trigger {
      Trigger::Label { target, label } => selected[*target].labels().map_or(false, |labels| label.matches(labels)),
      Trigger::Present { target } => selected[*target].is_present(),
    }
  }

  /// A condition that does not fire is vacuously satisfied.
  pub(crate) fn passes<H>(&self, selected: &[&StepOption<H>]) -> bool {
    if !self.fires(selected) {
      return true;
    }
    match &self.effect {
      Effect::RequirePresent(steps) => steps.iter().all(|&i| selected[i].is_present()),
      Effect::RequireEmpty(steps) => steps.iter().all(|&i| selected[i].is_empty()),
    }
  }
}

