use local_push_docker::{DockerClient, DockerExecutor};

/// Attach an interactive shell to the container started by a running `local-push`.
pub async fn enter<E: DockerExecutor>(
    client: &DockerClient<E>,
    container: &str,
) -> anyhow::Result<()> {
    println!("(cf-local-push) Enter container");
    client.enter(container).await?;
    Ok(())
}
