use hintforge_api::{ConfigSink, SinkError};
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

/// Sink writing artifacts below a root directory, creating intermediate
/// directories as needed. Re-running a build overwrites in place.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSink { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl ConfigSink for FsSink {
    fn write(&mut self, path: &str, contents: &str) -> Result<(), SinkError> {
        let destination = self.root.join(path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|error| SinkError::new(path, error.to_string()))?;
        }
        fs::write(&destination, contents).map_err(|error| SinkError::new(path, error.to_string()))
    }
}

/// In-memory sink for tests and dry runs, keeping write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: IndexMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &IndexMap<String, String> {
        &self.files
    }

    pub fn contents(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl ConfigSink for MemorySink {
    fn write(&mut self, path: &str, contents: &str) -> Result<(), SinkError> {
        self.files.insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
