//! Dockerfile generation for local-push.
//!
//! # Push pipeline
//!
//! ```text
//! cf local-push
//!   1. Engine check ── docker on $PATH
//!   2. Dockerfile   ── DockerfileGenerator::render() → ./Dockerfile
//!                      (asks before overwriting an existing one)
//!   3. Build        ── docker build -t IMAGE .
//!   4. Run          ── docker run -p PORT:PORT ... --name IMAGE IMAGE
//! ```
//!
//! # Buildstep image
//!
//! The generated Dockerfile builds on a buildstep image, which bundles the
//! Cloud Foundry buildpacks behind two entry points:
//! - `/build/builder` detects and compiles the app under `/app`
//! - `/start web` launches the `web` process from the resulting droplet
//!
//! The app runs as the `vcap` user, same as on the platform.

pub mod dockerfile;
pub mod write;

pub use dockerfile::{DOCKERFILE, DockerfileGenerator};
pub use write::{DockerfileError, dockerfile_exists, write_dockerfile};
