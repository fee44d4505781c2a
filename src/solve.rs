use crate::prelude::*;

use anyhow::Context;
use std::process::Command;

/// The solving collaborator. Implementations get a canonical face-notation
/// state and answer with the move sequence that solves it.
pub trait Solve {
    fn solve(&self, state: &CubeState) -> anyhow::Result<Vec<Move>>;
}

/// Delegates to an external Kociemba two-phase solver executable.
///
/// The solver is a black box: it receives the canonical facelet string as its
/// only argument and prints a whitespace-separated move sequence on stdout,
/// or a line starting with `ERROR`. Failures are surfaced as-is and never
/// retried.
pub struct KociembaCli {
    program: String,
}

impl KociembaCli {
    pub fn new(program: impl Into<String>) -> KociembaCli {
        KociembaCli {
            program: program.into(),
        }
    }
}

impl Default for KociembaCli {
    fn default() -> KociembaCli {
        KociembaCli::new("kociemba")
    }
}

impl Solve for KociembaCli {
    fn solve(&self, state: &CubeState) -> anyhow::Result<Vec<Move>> {
        let output = Command::new(&self.program)
            .arg(state.to_string())
            .output()
            .with_context(|| format!("could not run solver `{}`", self.program))?;

        let stdout =
            String::from_utf8(output.stdout).context("solver wrote non-utf8 output")?;
        let line = stdout.trim();
        log::debug!("solver output: {}", line);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("solver exited with {}: {}", output.status, stderr.trim());
        }
        if line.starts_with("ERROR") {
            anyhow::bail!("{}", line);
        }

        Move::parse_sequence(line)
    }
}
