pub mod label;
pub mod option;
pub mod step;

// Re-export key types for easier access from other pipesmith modules (and lib.rs)
pub use label::{LabelMatch, LabelValue, Labels};
pub use option::StepOption;
pub use step::StepDef;
