use local_push_build::{DockerfileGenerator, dockerfile_exists, write_dockerfile};
use local_push_core::{LocalPushConfig, SessionContext};
use local_push_docker::{DockerClient, RunSpec, locate_engine};
use std::path::PathBuf;

use crate::prompt;
use crate::supervisor::{self, Outcome};

/// Options resolved from the command line. `None` falls back to local-push.toml.
#[derive(Debug, Default)]
pub struct PushOptions {
    pub port: Option<String>,
    pub image: Option<String>,
    pub enter: bool,
}

/// Generate the Dockerfile, build the image, and run it until exit or Ctrl-C.
pub async fn local_push(options: PushOptions) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");

    // Nothing touches the filesystem or docker before this check.
    locate_engine()?;

    // Not used by the push itself yet.
    let ctx = match SessionContext::discover() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::debug!(error = %e, "cf command context unavailable");
            SessionContext::default()
        }
    };
    tracing::debug!(user = ?ctx.user, endpoint = ?ctx.endpoint, "cf command context");

    let config = LocalPushConfig::load(&project_dir)?;
    let port = match options.port {
        Some(port) => port,
        None => config.run.port,
    };
    let image = match options.image {
        Some(image) => image,
        None => config.run.image,
    };
    let spec = RunSpec::new(&image, &port);
    tracing::debug!(?spec, enter = options.enter, "resolved options");

    let client = DockerClient::new();

    if options.enter {
        return super::enter(&client, &spec.container).await;
    }

    if dockerfile_exists(&project_dir) {
        println!("Dockerfile is already exist");
        let overwrite =
            prompt::confirm_overwrite(&mut std::io::stdin().lock(), &mut std::io::stdout())?;
        if !overwrite {
            println!("Aborting");
            return Ok(());
        }
    }

    println!("(cf-local-push) Generate Dockerfile");
    let dockerfile = DockerfileGenerator::new(&config.build).render();
    write_dockerfile(&project_dir, &dockerfile)?;

    println!("(cf-local-push) Start building docker image");
    client.build(&spec.image).await?;

    println!("(cf-local-push) Start running docker container");
    match supervisor::supervise(&client, &spec, supervisor::interrupted()).await? {
        Outcome::Exited => tracing::debug!("container exited"),
        Outcome::Interrupted => tracing::debug!("container stopped on interrupt"),
    }

    Ok(())
}
