pub mod client;
pub mod docker;
pub mod executor;

pub use client::{ContainerError, DockerClient, RunSpec};
pub use docker::DockerError;
pub use executor::{DockerExecutor, Output, RealExecutor, locate_engine};
