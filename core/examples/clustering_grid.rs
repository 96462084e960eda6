// pipesmith/examples/clustering_grid.rs

use pipesmith::{Condition, Pipesmith, StepOption, StepRegistry};
use tracing::info;

// 1. Handles are plain function pointers; pipesmith never calls them.
type Stage = fn(&str) -> String;

fn tfidf(input: &str) -> String {
  format!("tfidf({})", input)
}
fn embeddings(input: &str) -> String {
  format!("embed({})", input)
}
fn kmeans(input: &str) -> String {
  format!("kmeans({})", input)
}
fn hdbscan(input: &str) -> String {
  format!("hdbscan({})", input)
}
fn top_sampler(input: &str) -> String {
  format!("top({})", input)
}
fn random_sampler(input: &str) -> String {
  format!("random({})", input)
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Clustering Grid Example ---");

  // 2. Declare the steps. `None` means "no stage here".
  let registry: StepRegistry<Stage> = StepRegistry::builder()
    .step("vectorizer", [Some(tfidf as Stage), Some(embeddings as Stage), None])
    .step("clusterer", [Some(kmeans as Stage), Some(hdbscan as Stage), None])
    .step(
      "sampler",
      [
        StepOption::handle(top_sampler as Stage).with_label("name", "top"),
        StepOption::handle(random_sampler as Stage).with_label("independent", true),
      ],
    )
    .build()?;

  // 3. An independent sampler works on raw input; "top" needs clusters to rank.
  let conditions = vec![
    Condition::skip_if_label("sampler", ("independent", true), ["vectorizer", "clusterer"]),
    Condition::require_if_label("sampler", ("name", "top"), ["vectorizer", "clusterer"]),
  ];

  let smith = Pipesmith::new(registry, conditions)?;
  info!(candidates = smith.candidate_count(), "Expanding.");

  // 4. Run each surviving pipeline; executing handles is the caller's job.
  for combo in smith.generate_combinations() {
    let output = combo
      .handles()
      .flatten()
      .fold("corpus".to_string(), |acc, stage| stage(acc.as_str()));
    info!("{:?} -> {}", combo.indices(), output);
  }

  Ok(())
}
