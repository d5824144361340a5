//! Environment probes for integration tests.

use std::path::Path;
use std::process::Command;

const DEFAULT_DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Returns `true` if a Docker daemon is reachable for integration tests.
#[must_use]
pub fn docker_available() -> bool {
    probe_docker(std::env::var("DOCKER_HOST").ok().as_deref())
}

fn probe_docker(host: Option<&str>) -> bool {
    match host {
        Some(host) => host
            .strip_prefix("unix://")
            .is_none_or(|socket| Path::new(socket).exists()),
        None => {
            Path::new(DEFAULT_DOCKER_SOCKET).exists()
                || Command::new("docker")
                    .arg("info")
                    .output()
                    .is_ok_and(|output| output.status.success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_unix_socket_is_unavailable() {
        assert!(!probe_docker(Some("unix:///definitely/missing.sock")));
    }

    #[test]
    fn tcp_hosts_are_trusted() {
        assert!(probe_docker(Some("tcp://127.0.0.1:2375")));
    }

    #[test]
    fn default_probe_runs_without_override() {
        let _ = probe_docker(None);
    }
}
