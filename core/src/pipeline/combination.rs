// pipesmith/src/pipeline/combination.rs

//! One fully-resolved selection: a slot per declared step.

use crate::core::option::StepOption;
use crate::registry::StepRegistry;

use std::fmt;

/// A surviving combination, borrowing the options from the registry it was
/// generated from. Slot `i` belongs to the `i`-th declared step.
pub struct Combination<'a, H> {
  registry: &'a StepRegistry<H>,
  indices: Vec<usize>,
}

impl<'a, H> Combination<'a, H> {
  pub(crate) fn new(registry: &'a StepRegistry<H>, indices: Vec<usize>) -> Self {
    Self { registry, indices }
  }

  /// The chosen option index for each step.
  pub fn indices(&self) -> &[usize] {
    &self.indices
  }

  pub fn len(&self) -> usize {
    self.indices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// The option selected for the step at `step_index`.
  pub fn option(&self, step_index: usize) -> Option<&'a StepOption<H>> {
    let registry = self.registry;
    let option_index = *self.indices.get(step_index)?;
    registry.steps().get(step_index).map(|s| &s.options[option_index])
  }

  /// The option selected for the named step; `None` if no such step exists.
  pub fn get(&self, step_name: &str) -> Option<&'a StepOption<H>> {
    self.option(self.registry.step_index(step_name)?)
  }

  /// The handle selected for the named step; `None` for an unknown step or an empty selection.
  pub fn handle(&self, step_name: &str) -> Option<&'a H> {
    self.get(step_name).and_then(StepOption::handle_ref)
  }

  /// Per-step handles in declaration order, `None` where the selection is empty.
  pub fn handles(&self) -> impl Iterator<Item = Option<&'a H>> + '_ {
    self.iter().map(|(_, opt)| opt.handle_ref())
  }

  /// `(step name, selected option)` pairs in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a StepOption<H>)> + '_ {
    let registry = self.registry;
    registry
      .steps()
      .iter()
      .zip(self.indices.iter())
      .map(|(step, &i)| (step.name.as_str(), &step.options[i]))
  }

  pub fn to_handles(&self) -> Vec<Option<&'a H>> {
    self.handles().collect()
  }
}

impl<H> Clone for Combination<'_, H> {
  fn clone(&self) -> Self {
    Self {
      registry: self.registry,
      indices: self.indices.clone(),
    }
  }
}

// Two combinations are equal when they select the same options of the same registry.
impl<H> PartialEq for Combination<'_, H> {
  fn eq(&self, other: &Self) -> bool {
    std::ptr::eq(self.registry, other.registry) && self.indices == other.indices
  }
}

impl<H> Eq for Combination<'_, H> {}

impl<H: fmt::Debug> fmt::Debug for Combination<'_, H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut map = f.debug_map();
    for (name, opt) in self.iter() {
      map.entry(&name, &opt.handle_ref());
    }
    map.finish()
  }
}
