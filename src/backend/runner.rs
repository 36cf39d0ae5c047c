//! Sandboxed runner - executes a compiled artifact with timeout-and-kill
//!
//! The child gets no stdin; stdout is captured. If the wall-clock ceiling
//! elapses, the wait future is dropped and the kill-on-drop policy forcefully
//! terminates the process, classifying the attempt as a timeout. Taking the
//! artifact by value makes this the single point that retires its ownership:
//! the binary is deleted when the guard drops, on every exit path.

use std::process::Stdio;

use tokio::process::Command;

use crate::backend::compiler::CompiledArtifact;
use crate::config::EvalConfig;
use crate::errors::EvalError;

/// Run a compiled artifact and classify the outcome.
pub async fn run(artifact: CompiledArtifact, config: &EvalConfig) -> Result<String, EvalError> {
    tracing::debug!(artifact = %artifact.path().display(), "running artifact");

    let child = Command::new(artifact.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = match tokio::time::timeout(config.run_timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Err(EvalError::Io(e)),
        Err(_) => {
            return Err(EvalError::Timeout {
                limit: config.run_timeout,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = if stderr.trim().is_empty() {
            format!("process exited with {}", output.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(EvalError::Runtime(diagnostic));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    // `artifact` drops here and on every early return above, deleting the binary
}

#[cfg(test)]
#[cfg(unix)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Stand in for a compiled binary with an executable shell script.
    fn script_artifact(dir: &std::path::Path, name: &str, body: &str) -> (CompiledArtifact, PathBuf) {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        (CompiledArtifact::new(path.clone()), path)
    }

    fn short_config(dir: &std::path::Path) -> EvalConfig {
        EvalConfig {
            work_dir: dir.to_path_buf(),
            run_timeout: Duration::from_millis(500),
            ..EvalConfig::default()
        }
    }

    #[tokio::test]
    async fn captures_trimmed_stdout_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let (artifact, path) = script_artifact(dir.path(), "ok", "echo '  15  '");
        let out = run(artifact, &short_config(dir.path())).await.unwrap();
        assert_eq!(out, "15");
        assert!(!path.exists(), "artifact must be deleted after a successful run");
    }

    #[tokio::test]
    async fn nonzero_exit_classifies_as_runtime_error() {
        let dir = tempfile::tempdir().unwrap();
        let (artifact, path) = script_artifact(dir.path(), "boom", "echo 'assertion failed' >&2; exit 3");
        let err = run(artifact, &short_config(dir.path())).await.unwrap_err();
        match err {
            EvalError::Runtime(diag) => assert!(diag.contains("assertion failed")),
            other => panic!("expected Runtime, got {other:?}"),
        }
        assert!(!path.exists(), "artifact must be deleted after a failed run");
    }

    #[tokio::test]
    async fn exceeding_the_ceiling_classifies_as_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let (artifact, path) = script_artifact(dir.path(), "spin", "sleep 30");
        let started = std::time::Instant::now();
        let err = run(artifact, &short_config(dir.path())).await.unwrap_err();
        assert!(matches!(err, EvalError::Timeout { .. }));
        // bounded margin of the ceiling, nowhere near the sleep duration
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!path.exists(), "artifact must be deleted after a timeout");
    }

    #[tokio::test]
    async fn empty_stderr_falls_back_to_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let (artifact, _path) = script_artifact(dir.path(), "silent", "exit 7");
        let err = run(artifact, &short_config(dir.path())).await.unwrap_err();
        match err {
            EvalError::Runtime(diag) => assert!(diag.contains("exit")),
            other => panic!("expected Runtime, got {other:?}"),
        }
    }
}
