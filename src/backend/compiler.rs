//! Compiler invoker - transient source files and external toolchain driving
//!
//! Each invocation names its transient files with a fixed-length identifier
//! drawn from the OS random source. Concurrent evaluations share the working
//! directory but never a path, so no locking is needed.
//!
//! The source file is owned by a [`TransientFile`] guard and is gone before
//! `compile` returns, on every path. The artifact outlives `compile` as a
//! [`CompiledArtifact`] whose ownership transfers to the runner; it is
//! deleted exactly once, when that guard drops.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use rand::RngCore;
use rand::rngs::OsRng;
use tokio::process::Command;

use crate::backend::harness::SynthesizedProgram;
use crate::config::EvalConfig;
use crate::errors::EvalError;

/// RAII handle to a transient file; removal on drop, failures logged and
/// swallowed — cleanup can never mask the primary outcome.
#[derive(Debug)]
pub struct TransientFile {
    path: PathBuf,
}

impl TransientFile {
    /// Write `contents` to `path` and take ownership of the file.
    pub fn create(path: PathBuf, contents: &str) -> std::io::Result<Self> {
        std::fs::write(&path, contents)?;
        Ok(Self { path })
    }

    /// Adopt an existing path without writing to it.
    pub(crate) fn adopt(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove transient file");
            }
        }
    }
}

/// Runnable artifact produced by [`compile`]. Exclusive to one run; deleted
/// when dropped.
#[derive(Debug)]
pub struct CompiledArtifact {
    file: TransientFile,
}

impl CompiledArtifact {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            file: TransientFile::adopt(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Fixed-length identifier from 8 bytes of OS randomness. Collision
/// probability between concurrent evaluations is negligible, which is what
/// makes the shared working directory safe without locking.
pub fn random_id() -> String {
    let mut bytes = [0u8; 8];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Compile a synthesized program into a runnable artifact.
///
/// The compiler runs under its own wall-clock ceiling so a pathological
/// fragment cannot hang the compile step. Nonzero exit and invocation
/// failure both classify as [`EvalError::Compile`], with the compiler's
/// diagnostic stream captured verbatim.
pub async fn compile(
    program: &SynthesizedProgram,
    config: &EvalConfig,
) -> Result<CompiledArtifact, EvalError> {
    let id = random_id();
    let source_path = config.work_dir.join(format!("sub_{id}.cpp"));
    let artifact_path = config.work_dir.join(format!("sub_{id}"));

    // The guard deletes the source on every return path below.
    let source = TransientFile::create(source_path, program.as_str())?;

    tracing::debug!(
        compiler = %config.compiler.display(),
        source = %source.path().display(),
        "invoking compiler"
    );

    let child = Command::new(&config.compiler)
        .arg(source.path())
        .arg("-o")
        .arg(&artifact_path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            EvalError::Compile(format!(
                "failed to invoke compiler '{}': {e}",
                config.compiler.display()
            ))
        })?;

    let output = match tokio::time::timeout(config.compile_timeout, child.wait_with_output()).await
    {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            discard_partial(&artifact_path);
            return Err(EvalError::Io(e));
        }
        Err(_) => {
            // the dropped wait future kills the compiler via kill_on_drop
            discard_partial(&artifact_path);
            return Err(EvalError::Compile(format!(
                "compiler exceeded the {}s ceiling",
                config.compile_timeout.as_secs()
            )));
        }
    };

    if !output.status.success() {
        discard_partial(&artifact_path);
        let diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(EvalError::Compile(diagnostics));
    }

    Ok(CompiledArtifact::new(artifact_path))
}

/// Best-effort removal of a partially written artifact on failure paths.
fn discard_partial(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial artifact");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn random_id_is_fixed_length_hex() {
        let id = random_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn random_ids_do_not_collide() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| random_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn transient_file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch.cpp");
        {
            let _file = TransientFile::create(path.clone(), "int main() {}").unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn dropping_a_missing_transient_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone");
        let file = TransientFile::adopt(path);
        drop(file); // nothing to remove; must not panic
    }

    #[tokio::test]
    async fn missing_compiler_classifies_as_compile_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = EvalConfig {
            work_dir: dir.path().to_path_buf(),
            compiler: PathBuf::from("definitely-not-a-compiler"),
            ..EvalConfig::default()
        };
        let signals = crate::frontend::fragment::scan("int f(vector<int>& nums) { return 0; }");
        let literal = crate::frontend::literal::normalize("[1]").unwrap();
        let program = crate::backend::harness::synthesize(
            "int f(vector<int>& nums) { return 0; }",
            &signals,
            &literal,
        );

        let err = compile(&program, &config).await.unwrap_err();
        assert!(matches!(err, EvalError::Compile(_)));

        // the transient source must not survive the failed attempt
        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }
}
