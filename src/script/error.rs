use std::fmt;

use crate::link::error::LinkError;

#[derive(Debug)]
pub enum ScriptError {
    /// Script file or directory could not be read
    Io { path: String, source: std::io::Error },

    /// Script file is not valid YAML for a session script
    Yaml { path: String, source: serde_yaml::Error },

    /// A location in the script could not be opened
    Link(LinkError),

    /// `copy_link` / `open_link` before any link was generated
    NoLink,

    /// `copy_reply` without a decline outcome on screen
    NoReply,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io { path, source } => write!(f, "Failed to read {}: {}", path, source),
            ScriptError::Yaml { path, source } => {
                write!(f, "Invalid session script {}: {}", path, source)
            }
            ScriptError::Link(e) => write!(f, "{}", e),
            ScriptError::NoLink => write!(f, "No link has been generated yet"),
            ScriptError::NoReply => write!(f, "No reply is on offer"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io { source, .. } => Some(source),
            ScriptError::Yaml { source, .. } => Some(source),
            ScriptError::Link(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LinkError> for ScriptError {
    fn from(e: LinkError) -> Self {
        ScriptError::Link(e)
    }
}
