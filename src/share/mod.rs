pub mod clipboard;
pub mod share_targets;
