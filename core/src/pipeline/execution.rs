// pipesmith/src/pipeline/execution.rs

//! Product expansion and filtering. The first declared step varies slowest,
//! the last fastest; options are tried in declared order.

use crate::pipeline::combination::Combination;
use crate::pipeline::definition::Pipesmith;

use std::iter::FusedIterator;
use tracing::{event, instrument, Level};

impl<H> Pipesmith<H> {
  /// Lazily yields the surviving combinations in product order.
  ///
  /// Only the current candidate is held in memory, so this is the way to walk
  /// products too large to materialize.
  pub fn combinations(&self) -> Combinations<'_, H> {
    Combinations {
      smith: self,
      cursor: vec![0; self.registry.len()],
      exhausted: self.registry.steps().iter().any(|s| s.is_empty()),
    }
  }

  /// Returns every surviving combination, in product order.
  ///
  /// A combination is kept iff it passes every condition. Repeated calls yield
  /// identical results.
  #[instrument(
    name = "Pipesmith::generate_combinations",
    skip_all,
    fields(
      num_steps = self.registry.len(),
      num_conditions = self.resolved.len(),
      candidates = self.registry.candidate_count(),
    )
  )]
  pub fn generate_combinations(&self) -> Vec<Combination<'_, H>> {
    let survivors: Vec<_> = self.combinations().collect();
    event!(Level::DEBUG, survivors = survivors.len(), "Combination generation finished.");
    survivors
  }
}

/// Iterator over surviving combinations. See `Pipesmith::combinations`.
pub struct Combinations<'a, H> {
  smith: &'a Pipesmith<H>,
  cursor: Vec<usize>,
  exhausted: bool,
}

impl<'a, H> Combinations<'a, H> {
  /// Moves `cursor` to the next candidate. Returns false once the product wraps around.
  fn advance(&mut self) -> bool {
    let steps = self.smith.registry.steps();
    for pos in (0..self.cursor.len()).rev() {
      self.cursor[pos] += 1;
      if self.cursor[pos] < steps[pos].len() {
        return true;
      }
      self.cursor[pos] = 0;
    }
    false
  }
}

impl<'a, H> Iterator for Combinations<'a, H> {
  type Item = Combination<'a, H>;

  fn next(&mut self) -> Option<Self::Item> {
    while !self.exhausted {
      let candidate = self.cursor.clone();
      self.exhausted = !self.advance();

      match self.smith.first_failing_condition(&candidate) {
        None => return Some(Combination::new(&self.smith.registry, candidate)),
        Some(condition_index) => {
          event!(Level::TRACE, candidate = ?candidate, condition_index, "Candidate rejected.");
        }
      }
    }
    None
  }
}

impl<H> FusedIterator for Combinations<'_, H> {}
