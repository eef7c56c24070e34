//! Shareable yes/no "love links".
//!
//! A sender walks a short generator flow (name, relationship status,
//! optional recipient and message) and gets a link whose query string
//! carries the ask. Opening that link starts a receiver session that
//! renders the question and turns the answer into an outcome card.

pub mod cli;
pub mod flow;
pub mod link;
pub mod outcome;
pub mod render;
pub mod report;
pub mod script;
pub mod share;
pub mod trace;

pub use flow::controller::{FlowController, start_session, transition};
pub use link::codec::{decode, encode};
pub use link::link_model::{AskPayload, StatusKind, status_label};
pub use outcome::recorder::outcome;
