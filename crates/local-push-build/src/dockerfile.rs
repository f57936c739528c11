use local_push_core::{BuildConfig, SERVICE_USER};

/// File name of the generated Dockerfile.
pub const DOCKERFILE: &str = "Dockerfile";

/// Generates the Dockerfile for a buildpack-style build on a buildstep image.
pub struct DockerfileGenerator<'a> {
    config: &'a BuildConfig,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    pub fn render(&self) -> String {
        format!(
            "FROM {base}\n\
             ENV USER {user}\n\
             ADD . /app\n\
             RUN /build/builder\n\
             CMD /start web",
            base = self.config.base_image,
            user = SERVICE_USER,
        )
    }
}
