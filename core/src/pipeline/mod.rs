// pipesmith/src/pipeline/mod.rs

//! Defines the `Pipesmith<H>` combination engine, its construction and the
//! product expansion that yields surviving combinations.

pub mod combination;
pub mod definition;
pub mod execution;

// Re-export the main engine struct
pub use combination::Combination;
pub use definition::Pipesmith;
pub use execution::Combinations;
