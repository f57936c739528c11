use std::path::{Path, PathBuf};

use crate::dockerfile::DOCKERFILE;

/// Check whether anything already exists at `<project_dir>/Dockerfile`.
///
/// Only a definite "not found" counts as absent; any other stat failure is
/// treated as present so the caller asks before overwriting.
pub fn dockerfile_exists(project_dir: &Path) -> bool {
    match std::fs::metadata(project_dir.join(DOCKERFILE)) {
        Ok(_) => true,
        Err(e) => e.kind() != std::io::ErrorKind::NotFound,
    }
}

/// Write the Dockerfile into the project directory, replacing any existing one.
pub fn write_dockerfile(project_dir: &Path, content: &str) -> Result<PathBuf, DockerfileError> {
    let path = project_dir.join(DOCKERFILE);

    std::fs::write(&path, content).map_err(|e| DockerfileError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote Dockerfile");
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum DockerfileError {
    #[error("failed to write Dockerfile at {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
