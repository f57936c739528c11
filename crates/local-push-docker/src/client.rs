use crate::docker::DockerError;
use crate::executor::{DockerExecutor, Output, RealExecutor};
use local_push_core::SERVICE_USER;

/// Image, container, and port of one local push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    pub image: String,
    /// Always equal to `image` within a session.
    pub container: String,
    pub port: String,
}

impl RunSpec {
    pub fn new(image: &str, port: &str) -> Self {
        Self {
            image: image.to_owned(),
            container: image.to_owned(),
            port: port.to_owned(),
        }
    }
}

/// docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Image ──

    /// Build the image from the Dockerfile in the current directory.
    pub async fn build(&self, image: &str) -> Result<(), ContainerError> {
        self.executor
            .exec_streaming(&args(["build", "-t", image, "."]), Output::Stream)
            .await
            .map_err(|e| ContainerError::Build {
                image: image.to_owned(),
                source: e,
            })
    }

    // ── Container lifecycle ──

    /// Run the container in the foreground until it exits.
    pub async fn run(&self, spec: &RunSpec) -> Result<(), ContainerError> {
        let port_map = format!("{port}:{port}", port = spec.port);
        let port_env = format!("PORT={}", spec.port);
        let vcap_port_env = format!("VCAP_APP_PORT={}", spec.port);

        self.executor
            .exec_streaming(
                &args([
                    "run",
                    "-p",
                    &port_map,
                    "-e",
                    &port_env,
                    "-e",
                    &vcap_port_env,
                    "--name",
                    &spec.container,
                    &spec.image,
                ]),
                Output::Stream,
            )
            .await
            .map_err(|e| ContainerError::Run {
                container: spec.container.clone(),
                source: e,
            })
    }

    /// Open an interactive bash session in a running container.
    pub async fn enter(&self, container: &str) -> Result<(), ContainerError> {
        self.executor
            .exec_interactive(&args([
                "exec",
                "--interactive",
                "--tty",
                "--user",
                SERVICE_USER,
                container,
                "/bin/bash",
            ]))
            .await
            .map_err(|e| ContainerError::Enter {
                container: container.to_owned(),
                source: e,
            })
    }

    pub async fn stop(&self, container: &str) -> Result<(), ContainerError> {
        self.executor
            .exec_streaming(&args(["stop", container]), Output::Discard)
            .await
            .map_err(|e| ContainerError::Stop {
                container: container.to_owned(),
                source: e,
            })
    }

    pub async fn remove(&self, container: &str) -> Result<(), ContainerError> {
        self.executor
            .exec_streaming(&args(["rm", container]), Output::Discard)
            .await
            .map_err(|e| ContainerError::Remove {
                container: container.to_owned(),
                source: e,
            })
    }

    /// Stop, then remove the container. Both steps are best-effort.
    pub async fn teardown(&self, container: &str) {
        // arch-lint: allow(no-error-swallowing) reason="teardown runs on interrupt and must always reach rm and exit"
        if let Err(e) = self.stop(container).await {
            tracing::debug!(error = %e, "ignoring stop failure");
        }
        // arch-lint: allow(no-error-swallowing) reason="teardown runs on interrupt and must always complete"
        if let Err(e) = self.remove(container).await {
            tracing::debug!(error = %e, "ignoring rm failure");
        }
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("failed to build image {image}")]
    Build { image: String, source: DockerError },

    #[error("failed to run container {container}")]
    Run {
        container: String,
        source: DockerError,
    },

    #[error("failed to enter the container {container}")]
    Enter {
        container: String,
        source: DockerError,
    },

    #[error("failed to stop container {container}")]
    Stop {
        container: String,
        source: DockerError,
    },

    #[error("failed to remove container {container}")]
    Remove {
        container: String,
        source: DockerError,
    },
}
