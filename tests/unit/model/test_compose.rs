use faucet_verify::application::config::ContainerConfig;
use faucet_verify::application::interfaces::container::ContainerRuntime;
use faucet_verify::error::AppError;
use faucet_verify::model::compose::DockerCompose;

fn container_config(runtime: &str, compose_file: Option<&str>) -> ContainerConfig {
    ContainerConfig {
        runtime: runtime.to_string(),
        compose_file: compose_file.map(str::to_string),
        service: "faucet".to_string(),
        wallet_path: "/var/faucet/wallet.json".to_string(),
    }
}

#[test]
fn test_compose_args_without_file() {
    let compose = DockerCompose::new(&container_config("docker", None));
    assert_eq!(
        compose.compose_args(&["logs", "--no-color", "faucet"]),
        vec!["compose", "logs", "--no-color", "faucet"]
    );
}

#[test]
fn test_compose_args_with_file() {
    let compose = DockerCompose::new(&container_config("docker", Some("docker-compose.yml")));
    assert_eq!(
        compose.compose_args(&["exec", "-T", "faucet", "cat", "/var/faucet/wallet.json"]),
        vec![
            "compose",
            "-f",
            "docker-compose.yml",
            "exec",
            "-T",
            "faucet",
            "cat",
            "/var/faucet/wallet.json"
        ]
    );
}

#[tokio::test]
async fn test_missing_runtime_is_io_error() {
    let compose = DockerCompose::new(&container_config("faucet-verify-no-such-runtime", None));
    let err = compose.logs("faucet").await.expect_err("should fail");
    match err {
        AppError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_failing_runtime_keeps_stderr() {
    // `sh compose ...` fails because there is no script named `compose`
    let compose = DockerCompose::new(&container_config("sh", None));
    let err = compose
        .read_file("faucet", "/var/faucet/wallet.json")
        .await
        .expect_err("should fail");
    match &err {
        AppError::CommandFailed {
            command,
            status,
            stderr,
        } => {
            assert!(command.starts_with("sh compose exec -T faucet cat"));
            assert!(!status.success());
            assert!(stderr.contains("compose"));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("failed"));
}

#[tokio::test]
async fn test_runtime_stdout_is_returned() {
    let compose = DockerCompose::new(&container_config("echo", None));
    let out = compose.logs("faucet").await.expect("echo succeeds");
    assert_eq!(out, "compose logs --no-color faucet\n");
}
