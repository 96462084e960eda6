// pipesmith/examples/condition_records.rs

use pipesmith::{conditions_from_records, ConditionRecord, Pipesmith, StepRegistry, ValidationError};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Condition Records Example ---");

  let registry = StepRegistry::builder()
    .step("scaler", [Some("standard"), Some("minmax"), None])
    .step("reducer", [Some("pca"), None])
    .step("model", [Some("svm"), Some("forest")])
    .build()?;

  // Rules arriving as loosely-typed records, e.g. from a config layer.
  let records = vec![ConditionRecord::new("require_if_present", "reducer").with_steps(["scaler"])];
  let smith = Pipesmith::new(registry.clone(), conditions_from_records(records)?)?;
  for combo in smith.combinations() {
    info!("{:?}", combo);
  }

  // A typo in a step name is caught before anything is generated.
  let typo = vec![ConditionRecord::new("require_if_present", "reduser").with_steps(["scaler"])];
  match Pipesmith::new(registry, conditions_from_records(typo)?) {
    Err(err @ ValidationError::UnknownStep { .. }) => warn!(error = %err, "Rejected as expected."),
    Err(other) => return Err(other.into()),
    Ok(_) => anyhow::bail!("typo was not rejected"),
  }

  Ok(())
}
