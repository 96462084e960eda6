// pipesmith/src/conditional/mod.rs

//! Declarative conditions over step presence and option labels.
//!
//! `Condition` is what callers build; `ConditionRecord` is its loosely-typed
//! form for rules assembled from strings. Both are checked against a
//! `StepRegistry` when handed to `Pipesmith::new`.

pub mod condition;
pub(crate) mod evaluate;

pub use condition::{conditions_from_records, Condition, ConditionKind, ConditionRecord};
