use std::future::Future;

use local_push_docker::{ContainerError, DockerClient, DockerExecutor, RunSpec};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// `docker run` returned successfully.
    Exited,
    /// Interrupted; the container was stopped and removed.
    Interrupted,
}

/// Run the container and wait for it to exit or for `interrupt` to fire.
///
/// On interrupt the run is abandoned without waiting for the docker client
/// to finish, and the container is torn down with output discarded.
pub(crate) async fn supervise<E, S>(
    client: &DockerClient<E>,
    spec: &RunSpec,
    interrupt: S,
) -> Result<Outcome, ContainerError>
where
    E: DockerExecutor,
    S: Future<Output = ()>,
{
    // Ctrl-C also reaches `docker run`; prefer the interrupt so teardown still happens.
    tokio::select! {
        biased;

        () = interrupt => {
            println!("Interrupt: Stop and remove container (It takes a few seconds...)");
            client.teardown(&spec.container).await;
            Ok(Outcome::Interrupted)
        }
        result = client.run(spec) => result.map(|()| Outcome::Exited),
    }
}

/// Resolves on Ctrl-C. Never resolves if the listener cannot be installed.
pub(crate) async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::debug!(error = %e, "failed to listen for interrupt");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use local_push_docker::{DockerError, Output};
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(Vec<String>, Output)>>>;

    /// Records every call. `run` never finishes unless a result is configured.
    #[derive(Default)]
    struct FakeExecutor {
        calls: Calls,
        run_result: Option<fn() -> Result<(), DockerError>>,
        fail_teardown: bool,
    }

    impl DockerExecutor for FakeExecutor {
        async fn exec_streaming(&self, args: &[String], output: Output) -> Result<(), DockerError> {
            self.calls.lock().unwrap().push((args.to_vec(), output));

            if args[0] == "run" {
                return match self.run_result {
                    Some(result) => result(),
                    None => std::future::pending::<Result<(), DockerError>>().await,
                };
            }
            if self.fail_teardown {
                return Err(DockerError::CommandFailed {
                    args: args.to_vec(),
                    status: "exit status: 1".to_owned(),
                });
            }
            Ok(())
        }

        async fn exec_interactive(&self, _args: &[String]) -> Result<(), DockerError> {
            unreachable!("supervisor never execs into the container")
        }
    }

    fn spec() -> RunSpec {
        RunSpec::new("my-app", "8080")
    }

    /// Calls other than the (possibly never polled) `run`.
    fn teardown_calls(calls: &Calls) -> Vec<(Vec<String>, Output)> {
        calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(args, _)| args[0] != "run")
            .cloned()
            .collect()
    }

    fn argv(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| (*s).to_owned()).collect()
    }

    #[tokio::test]
    async fn interrupt_stops_then_removes_with_output_discarded() {
        let executor = FakeExecutor::default();
        let calls = executor.calls.clone();
        let client = DockerClient::with_executor(executor);

        let outcome = supervise(&client, &spec(), std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(
            teardown_calls(&calls),
            vec![
                (argv(&["stop", "my-app"]), Output::Discard),
                (argv(&["rm", "my-app"]), Output::Discard),
            ]
        );
    }

    #[tokio::test]
    async fn interrupt_while_running_abandons_run() {
        let executor = FakeExecutor::default();
        let calls = executor.calls.clone();
        let client = DockerClient::with_executor(executor);

        // Let the run start before the interrupt arrives.
        let interrupt = async {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
        };
        let outcome = supervise(&client, &spec(), interrupt).await.unwrap();

        assert_eq!(outcome, Outcome::Interrupted);
        let recorded = calls.lock().unwrap().clone();
        assert_eq!(recorded[0].0[0], "run");
        assert_eq!(recorded[0].1, Output::Stream);
        assert_eq!(teardown_calls(&calls).len(), 2);
    }

    #[tokio::test]
    async fn interrupt_ignores_teardown_failures() {
        let executor = FakeExecutor {
            fail_teardown: true,
            ..Default::default()
        };
        let calls = executor.calls.clone();
        let client = DockerClient::with_executor(executor);

        let outcome = supervise(&client, &spec(), std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(teardown_calls(&calls).len(), 2);
    }

    #[tokio::test]
    async fn interrupt_wins_when_run_fails_at_the_same_time() {
        let executor = FakeExecutor {
            run_result: Some(|| {
                Err(DockerError::CommandFailed {
                    args: vec!["run".to_owned()],
                    status: "exit status: 130".to_owned(),
                })
            }),
            ..Default::default()
        };
        let calls = executor.calls.clone();
        let client = DockerClient::with_executor(executor);

        let outcome = supervise(&client, &spec(), std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(teardown_calls(&calls).len(), 2);
    }

    #[tokio::test]
    async fn run_success_exits_cleanly() {
        let executor = FakeExecutor {
            run_result: Some(|| Ok(())),
            ..Default::default()
        };
        let client = DockerClient::with_executor(executor);

        let outcome = supervise(&client, &spec(), std::future::pending())
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Exited);
    }

    #[tokio::test]
    async fn run_failure_is_reported_without_teardown() {
        let executor = FakeExecutor {
            run_result: Some(|| {
                Err(DockerError::CommandFailed {
                    args: vec!["run".to_owned()],
                    status: "exit status: 125".to_owned(),
                })
            }),
            ..Default::default()
        };
        let calls = executor.calls.clone();
        let client = DockerClient::with_executor(executor);

        let err = supervise(&client, &spec(), std::future::pending())
            .await
            .unwrap_err();

        assert!(matches!(err, ContainerError::Run { .. }));
        assert!(teardown_calls(&calls).is_empty());
    }
}
