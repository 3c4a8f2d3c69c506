// ABOUTME: Integration tests for environment-driven configuration.
// ABOUTME: Tests the required API key, runtime overrides, and fixed server settings.

use portline::config::*;
use portline::error::Error;
use portline::runtime::RuntimeType;
use std::collections::HashMap;
use std::time::Duration;

fn load(vars: &[(&str, &str)]) -> Result<Config, Error> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_source(&move |var: &str| map.get(var).cloned())
}

mod api_key {
    use super::*;

    #[test]
    fn required() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, Error::MissingEnvVar(ref v) if v == "API_KEY"));
    }

    #[test]
    fn blank_counts_as_missing() {
        let err = load(&[("API_KEY", "   ")]).unwrap_err();
        assert!(matches!(err, Error::MissingEnvVar(_)));
    }

    #[test]
    fn value_is_kept_verbatim() {
        let config = load(&[("API_KEY", "secret123")]).unwrap();
        assert!(config.api_key.authorize("secret123"));
        assert!(!config.api_key.authorize("Secret123"));
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = load(&[("API_KEY", "hunter2")]).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}

mod runtime {
    use super::*;

    #[test]
    fn defaults_to_auto_detection() {
        let config = load(&[("API_KEY", "k")]).unwrap();
        assert_eq!(config.runtime.runtime, None);
        assert_eq!(config.runtime.socket, None);
    }

    #[test]
    fn explicit_runtime_and_socket() {
        let config = load(&[
            ("API_KEY", "k"),
            ("CONTAINER_RUNTIME", "podman"),
            ("CONTAINER_SOCKET", "/run/user/1000/podman/podman.sock"),
        ])
        .unwrap();
        assert_eq!(config.runtime.runtime, Some(RuntimeType::Podman));
        assert_eq!(
            config.runtime.socket.as_deref(),
            Some("/run/user/1000/podman/podman.sock")
        );
    }

    #[test]
    fn unknown_runtime_is_rejected() {
        let err = load(&[("API_KEY", "k"), ("CONTAINER_RUNTIME", "lxc")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("lxc")));
    }

    #[test]
    fn unix_docker_host_supplies_socket() {
        let config = load(&[("API_KEY", "k"), ("DOCKER_HOST", "unix:///tmp/docker.sock")]).unwrap();
        assert_eq!(config.runtime.socket.as_deref(), Some("/tmp/docker.sock"));
    }

    #[test]
    fn explicit_socket_beats_docker_host() {
        let config = load(&[
            ("API_KEY", "k"),
            ("CONTAINER_SOCKET", "/a.sock"),
            ("DOCKER_HOST", "unix:///b.sock"),
        ])
        .unwrap();
        assert_eq!(config.runtime.socket.as_deref(), Some("/a.sock"));
    }

    #[test]
    fn tcp_docker_host_is_rejected() {
        let err = load(&[("API_KEY", "k"), ("DOCKER_HOST", "tcp://10.0.0.1:2375")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}

mod fixed {
    use super::*;

    #[test]
    fn listens_on_port_3000() {
        let config = load(&[("API_KEY", "k")]).unwrap();
        assert_eq!(config.listen_addr.port(), 3000);
        assert!(config.listen_addr.ip().is_unspecified());
    }

    #[test]
    fn bounded_grace_and_query_timeout() {
        let config = load(&[("API_KEY", "k")]).unwrap();
        assert_eq!(config.shutdown_grace, Duration::from_secs(10));
        assert_eq!(config.query_timeout, Duration::from_secs(15));
    }
}

mod process_env {
    use super::*;

    #[test]
    fn reads_process_environment() {
        temp_env::with_vars(
            [
                ("API_KEY", Some("from_environment")),
                ("CONTAINER_RUNTIME", Some("docker")),
                ("CONTAINER_SOCKET", None),
                ("DOCKER_HOST", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.api_key.authorize("from_environment"));
                assert_eq!(config.runtime.runtime, Some(RuntimeType::Docker));
            },
        );
    }

    #[test]
    fn missing_in_process_environment() {
        temp_env::with_var_unset("API_KEY", || {
            assert!(matches!(Config::from_env(), Err(Error::MissingEnvVar(_))));
        });
    }
}
