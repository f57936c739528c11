use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::docker::{DOCKER, DockerError};

/// Where the engine's stdout and stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Stream stdout and stderr to our stdout.
    Stream,
    /// Send to the null device.
    Discard,
}

impl Output {
    fn stdout(self) -> Stdio {
        match self {
            Output::Stream => Stdio::inherit(),
            Output::Discard => Stdio::null(),
        }
    }

    /// Streamed stderr joins stdout, so all engine output lands on one stream.
    fn stderr(self) -> Stdio {
        match self {
            Output::Stream => std::io::stdout().into(),
            Output::Discard => Stdio::null(),
        }
    }
}

/// Abstraction over docker CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait DockerExecutor: Send + Sync {
    /// Execute a docker command, sending its output to `output`.
    async fn exec_streaming(&self, args: &[String], output: Output) -> Result<(), DockerError>;

    /// Execute a docker command attached to the terminal (stdin included).
    async fn exec_interactive(&self, args: &[String]) -> Result<(), DockerError>;
}

/// Real docker CLI executor.
pub struct RealExecutor;

impl DockerExecutor for RealExecutor {
    async fn exec_streaming(&self, args: &[String], output: Output) -> Result<(), DockerError> {
        tracing::debug!(?args, ?output, "docker");

        let status = tokio::process::Command::new(DOCKER)
            .args(args)
            .stdin(Stdio::null())
            .stdout(output.stdout())
            .stderr(output.stderr())
            .status()
            .await
            .map_err(|e| DockerError::Spawn {
                args: args.to_vec(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                status: status.to_string(),
            })
        }
    }

    async fn exec_interactive(&self, args: &[String]) -> Result<(), DockerError> {
        tracing::debug!(?args, "docker (interactive)");

        let status = tokio::process::Command::new(DOCKER)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| DockerError::Spawn {
                args: args.to_vec(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                status: status.to_string(),
            })
        }
    }
}

/// Find the docker executable on `$PATH`.
pub fn locate_engine() -> Result<PathBuf, DockerError> {
    let Some(path) = std::env::var_os("PATH") else {
        return Err(DockerError::EngineNotFound);
    };
    find_in_path(DOCKER, &path).ok_or(DockerError::EngineNotFound)
}

/// Search each directory of a `PATH`-style list for an executable `program`.
pub fn find_in_path(program: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{program}.exe")), dir.join(program)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(m) => m.is_file() && m.permissions().mode() & 0o111 != 0,
        // arch-lint: allow(no-error-swallowing) reason="an unreadable PATH entry is skipped like a missing one"
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "skipping PATH candidate");
            false
        }
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;

        std::fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_in_later_directory() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(&second.path().join("docker"));

        let path = std::env::join_paths([first.path(), second.path()]).unwrap();

        assert_eq!(
            find_in_path("docker", &path),
            Some(second.path().join("docker"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("docker"), "not a program").unwrap();

        let path = OsString::from(dir.path());
        assert_eq!(find_in_path("docker", &path), None);
    }

    #[test]
    fn skips_directory_with_program_name() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("docker")).unwrap();

        let path = OsString::from(dir.path());
        assert_eq!(find_in_path("docker", &path), None);
    }

    #[test]
    fn empty_path_finds_nothing() {
        assert_eq!(find_in_path("docker", OsStr::new("")), None);
    }
}
