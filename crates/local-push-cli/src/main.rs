mod commands;
mod prompt;
mod supervisor;

use std::process::ExitCode;

use clap::Parser;
use local_push_core::BuildInfo;

/// Environment variable enabling debug output.
const ENV_DEBUG: &str = "DEBUG_PLUGIN";

#[derive(Parser)]
#[command(
    name = "local-push",
    about = "Push cf app on local Docker container",
    long_about = "local-push deploys the app in the current working directory on a local \
                  docker container. You need to prepare a docker environment before.\n\n\
                  local-push removes the container after stopping it."
)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Port number to map to the docker container [default: 8080]
    ///
    /// You can access the application via this port. If docker runs inside
    /// docker-machine, use `curl $(docker-machine ip):PORT`.
    #[arg(long, short = 'p', value_name = "PORT")]
    port: Option<String>,

    /// Docker image name, also used as the container name [default: cf-local-push]
    #[arg(long, short = 'i', value_name = "NAME")]
    image: Option<String>,

    /// Enter the container started by `local-push`
    ///
    /// Use this from another terminal while `local-push` is running.
    /// You can regard this as `ssh`.
    #[arg(long)]
    enter: bool,

    /// Show version and quit
    #[arg(long, short = 'v')]
    version: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    tracing::debug!(args = ?std::env::args().collect::<Vec<_>>(), "run local-push plugin");

    // Usage errors go to stdout and exit 1, like every other failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            print!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let info = BuildInfo::current();

    if cli.version {
        println!("{info}");
        return ExitCode::SUCCESS;
    }

    let options = commands::PushOptions {
        port: cli.port,
        image: cli.image,
        enter: cli.enter,
    };

    match commands::local_push(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `DEBUG_PLUGIN` turns on debug traces; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_tracing() {
    let debug = std::env::var_os(ENV_DEBUG).is_some_and(|v| !v.is_empty());
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            // arch-lint: allow(no-silent-result-drop) reason="unset or invalid RUST_LOG falls back to the warn level"
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();
}
