pub mod outcome_model;
pub mod recorder;
