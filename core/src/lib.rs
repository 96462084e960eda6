// src/lib.rs

//! Pipesmith: enumerate valid pipeline configurations.
//!
//! Given a sequence of named steps, each with an ordered list of options, and
//! a handful of declarative conditions, Pipesmith computes the Cartesian
//! product of the options and keeps only the combinations every condition
//! accepts. It is meant for questions like "which vectorizer / clusterer /
//! sampler triples are legal together" without hand-written nested loops.
//!
//!  - Options are opaque caller handles (`StepOption::Present`) with optional
//!    scalar labels, or the empty selection (`StepOption::Empty`).
//!  - Conditions come in three kinds: `require_if_label`, `skip_if_label` and
//!    `require_if_present`.
//!  - All validation happens at construction; generating combinations never fails.
//!  - Handles are never invoked. Running the selected pipeline is up to the caller.

pub mod conditional;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

// --- Re-exports for the Public API ---

pub use crate::core::label::{LabelMatch, LabelValue, Labels};
pub use crate::core::option::StepOption;
pub use crate::core::step::StepDef;

pub use crate::conditional::{conditions_from_records, Condition, ConditionKind, ConditionRecord};

pub use crate::error::{PipesmithResult, ValidationError};

pub use crate::pipeline::{Combination, Combinations, Pipesmith};
pub use crate::registry::{StepRegistry, StepRegistryBuilder};

/// The crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/*
    Typical flow:
    1. Build a `StepRegistry<H>` with `StepRegistry::builder().step(name, options)...build()?`.
       `H` is whatever identifies a callable in your program (an enum, an index, a fn pointer).
    2. Describe the rules as `Condition`s (or parse `ConditionRecord`s).
    3. `Pipesmith::new(registry, conditions)?` checks every referenced step name.
    4. Walk `smith.combinations()` lazily or collect `smith.generate_combinations()`.
*/
