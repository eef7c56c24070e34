pub mod controller;
pub mod flow_model;
