//! Persistence sinks
//!
//! A sink accepts `(path, content)` pairs and stores them durably. Writes for
//! different artifacts are independent: [`emit`] issues them all at once and
//! reports each outcome separately, so one failed file never hides the rest.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;

use crate::driver::Artifact;
use crate::error::SinkError;

/// Destination for generated artifacts
pub trait ArtifactSink: Send + Sync + 'static {
    /// Store `content` at the logical `path`, creating parents as needed
    fn write(
        &self,
        path: &Path,
        content: &str,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Writes artifacts below a root directory
#[derive(Clone, Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for FsSink {
    async fn write(&self, path: &Path, content: &str) -> Result<(), SinkError> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SinkError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(&target, content)
            .await
            .map_err(|source| SinkError::Write {
                path: target.clone(),
                source,
            })?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "wrote artifact");
        Ok(())
    }
}

/// Keeps artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<IndexMap<PathBuf, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    /// Snapshot of everything written so far
    pub fn files(&self) -> IndexMap<PathBuf, String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IndexMap<PathBuf, String>> {
        // A poisoned map still holds complete entries.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ArtifactSink for MemorySink {
    async fn write(&self, path: &Path, content: &str) -> Result<(), SinkError> {
        self.lock().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Outcome of persisting one artifact
#[derive(Debug)]
pub struct WriteReport {
    pub path: PathBuf,
    pub result: Result<(), SinkError>,
}

impl WriteReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Write every artifact concurrently and report each outcome.
///
/// Reports come back in artifact order. Must run inside a tokio runtime.
pub async fn emit<S: ArtifactSink>(sink: Arc<S>, artifacts: Vec<Artifact>) -> Vec<WriteReport> {
    let handles: Vec<_> = artifacts
        .into_iter()
        .map(|artifact| {
            let sink = Arc::clone(&sink);
            let path = artifact.path.clone();
            let handle =
                tokio::spawn(async move { sink.write(&artifact.path, &artifact.content).await });
            (path, handle)
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(SinkError::Aborted {
                path: path.clone(),
                reason: e.to_string(),
            }),
        };
        match &result {
            Ok(()) => tracing::info!(path = %path.display(), "artifact written"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "artifact failed"),
        }
        reports.push(WriteReport { path, result });
    }
    reports
}
