//! External benchmark invocation.
//!
//! The report pipeline only needs two things from the outside world: a
//! yes/no answer to "do the benchmarks build?" and the captured text of a
//! measurement run. [`BenchRunner`] is that capability; [`CargoRunner`]
//! provides it by shelling out to cargo, [`CapturedRunner`] by replaying
//! text recorded earlier.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use xshell::{Shell, cmd};

use crate::verbose::{self, Timer, dprintln};

/// Number of trailing output lines quoted in a failure message.
const FAILURE_TAIL_LINES: usize = 40;

/// The two blocking steps of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `cargo bench --no-run`.
    BuildCheck,
    /// `cargo bench`.
    Measurement,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BuildCheck => "benchmark build",
            Self::Measurement => "benchmark run",
        })
    }
}

/// A failed external step. Either aborts the whole run.
#[derive(Debug)]
pub enum RunnerError {
    /// The command could not be launched, or xshell reported its failure.
    Shell {
        /// Step that failed.
        step: Step,
        /// Underlying shell error.
        source: xshell::Error,
    },
    /// The command ran and exited unsuccessfully.
    Failed {
        /// Step that failed.
        step: Step,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Tail of the captured output.
        output: String,
    },
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell { step, source } => write!(f, "{step} failed: {source}"),
            Self::Failed { step, code, output } => {
                match code {
                    Some(code) => write!(f, "{step} failed with exit code {code}")?,
                    None => write!(f, "{step} was terminated by a signal")?,
                }
                if !output.is_empty() {
                    write!(f, ":\n{output}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shell { source, .. } => Some(source),
            Self::Failed { .. } => None,
        }
    }
}

/// Produces benchmark output for the report pipeline.
pub trait BenchRunner {
    /// Check that the benchmarks compile, without measuring anything.
    fn build_check(&self) -> Result<(), RunnerError>;

    /// Run the benchmarks to completion and return everything they printed.
    fn measure(&self) -> Result<String, RunnerError>;
}

/// Runs the build check and the measurement, in that order.
pub fn run_benchmarks(runner: &dyn BenchRunner) -> Result<String, RunnerError> {
    {
        let _t = Timer::start("build check");
        runner.build_check()?;
    }
    let _t = Timer::start("measurement");
    runner.measure()
}

/// Invokes `cargo bench` against a manifest.
pub struct CargoRunner {
    manifest: PathBuf,
    extra_args: Vec<String>,
}

impl CargoRunner {
    /// Create a runner for `manifest`, forwarding `extra_args` to the
    /// measurement run.
    pub fn new(manifest: PathBuf, extra_args: Vec<String>) -> Self {
        Self {
            manifest,
            extra_args,
        }
    }
}

impl BenchRunner for CargoRunner {
    fn build_check(&self) -> Result<(), RunnerError> {
        let step = Step::BuildCheck;
        let shell_err = |source| RunnerError::Shell { step, source };

        dprintln!("Building benchmarks...");
        let sh = Shell::new().map_err(shell_err)?;
        let manifest = &self.manifest;
        let mut command = cmd!(sh, "cargo bench --manifest-path {manifest} --no-run");
        command.set_quiet(!verbose::is_verbose());
        command.run().map_err(shell_err)
    }

    fn measure(&self) -> Result<String, RunnerError> {
        let step = Step::Measurement;
        let shell_err = |source| RunnerError::Shell { step, source };

        dprintln!("Running benchmarks (this may take a while)...");
        let sh = Shell::new().map_err(shell_err)?;
        let manifest = &self.manifest;
        let extra_args = &self.extra_args;
        let mut command = cmd!(sh, "cargo bench --manifest-path {manifest} {extra_args...}");
        command.set_quiet(!verbose::is_verbose());
        command.set_ignore_status(true);
        let output = command.output().map_err(shell_err)?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(RunnerError::Failed {
                step,
                code: output.status.code(),
                output: tail(&text, FAILURE_TAIL_LINES),
            });
        }
        Ok(text)
    }
}

/// Replays benchmark output captured earlier.
pub struct CapturedRunner {
    text: String,
}

impl CapturedRunner {
    /// Wrap already-captured text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read captured output from `path`, or from stdin if `path` is `-`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read benchmark output from stdin")?;
            text
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read benchmark output {}", path.display()))?
        };
        Ok(Self::new(text))
    }
}

impl BenchRunner for CapturedRunner {
    fn build_check(&self) -> Result<(), RunnerError> {
        Ok(())
    }

    fn measure(&self) -> Result<String, RunnerError> {
        Ok(self.text.clone())
    }
}

/// Last `n` lines of `text`.
fn tail(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}
