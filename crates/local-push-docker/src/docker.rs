/// Name of the container engine binary looked up on `$PATH`.
pub const DOCKER: &str = "docker";

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker command is not found in your $PATH. Install it before.")]
    EngineNotFound,

    #[error("failed to start docker {args:?}")]
    Spawn {
        args: Vec<String>,
        source: std::io::Error,
    },

    #[error("docker command failed: {args:?} ({status})")]
    CommandFailed { args: Vec<String>, status: String },
}
