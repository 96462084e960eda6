// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use pipesmith::{Combination, Condition, Pipesmith, StepOption, StepRegistry};
use tracing::Level;

/// The vectorizer / clusterer / sampler fixture: 3 x 3 x 2 candidates.
pub fn scenario_registry() -> StepRegistry<&'static str> {
  StepRegistry::builder()
    .step("vectorizer", [Some("A"), Some("B"), None])
    .step("clusterer", [Some("C"), Some("D"), None])
    .step(
      "sampler",
      [
        StepOption::handle("S1").with_label("name", "top"),
        StepOption::handle("S2").with_label("independent", true),
      ],
    )
    .build()
    .expect("scenario registry is valid")
}

pub fn scenario_conditions() -> Vec<Condition> {
  vec![
    Condition::skip_if_label("sampler", ("independent", true), ["vectorizer", "clusterer"]),
    Condition::require_if_label("sampler", ("name", "top"), ["vectorizer", "clusterer"]),
  ]
}

pub fn scenario_smith() -> Pipesmith<&'static str> {
  Pipesmith::new(scenario_registry(), scenario_conditions()).expect("scenario conditions are valid")
}

/// Handles of each combination, `None` for the empty selection.
pub fn handle_rows(combos: &[Combination<'_, &'static str>]) -> Vec<Vec<Option<&'static str>>> {
  combos
    .iter()
    .map(|c| c.handles().map(|h| h.copied()).collect())
    .collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
