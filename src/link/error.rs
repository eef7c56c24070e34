use std::fmt;

#[derive(Debug)]
pub enum LinkError {
    /// Base location could not be parsed as an absolute URL
    InvalidBaseUrl { url: String, source: url::ParseError },

    /// Base location parsed but cannot carry a query (e.g. `mailto:`)
    UnsupportedBaseUrl(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::InvalidBaseUrl { url, source } => {
                write!(f, "Invalid base URL '{}': {}", url, source)
            }
            LinkError::UnsupportedBaseUrl(url) => {
                write!(f, "Base URL '{}' cannot carry query parameters", url)
            }
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkError::InvalidBaseUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}
