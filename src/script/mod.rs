pub mod context;
pub mod error;
pub mod runner;
pub mod script_model;
