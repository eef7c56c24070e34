pub mod codec;
pub mod error;
pub mod link_model;
