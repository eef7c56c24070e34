use std::{fs::OpenOptions, io::Write, path::PathBuf, sync::Mutex};

use crate::trace::trace::TraceEvent;

/// Appends one JSON line per dispatched action to a session trace file.
///
/// Tracing never interrupts a session: if the file cannot be opened or
/// written, a warning goes to stderr and the event is dropped.
pub struct TraceLogger {
    path: Option<PathBuf>,
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(f) => Self {
                path: Some(PathBuf::from(path)),
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            file: None,
        }
    }

    /// Logger for an optional configured path.
    pub fn from_option(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::new(p),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(file_mutex) = &self.file else {
            return;
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Warning: trace logger lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", json) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}
