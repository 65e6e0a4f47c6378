use crate::env::Environment;
use crate::error::ShellError;
use std::path::Path;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// How a launched program ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The program exited on its own with this code.
    Exited(ExitCode),
    /// The program was stopped by a signal (or the platform could not say how it ended).
    Signaled {
        signal: Option<i32>,
        core_dumped: bool,
    },
}

/// Capability to start a program and block until it ends.
///
/// The interpreter only ever talks to processes through this trait, which
/// keeps path resolution testable without spawning anything.
pub trait Launcher {
    /// Starts `program` with `argv` as its argument vector (`argv[0]` is the
    /// name the user typed) and waits for it to terminate. The child sees the
    /// variables of `env`, the same view its path was resolved against.
    ///
    /// Must return [`ShellError::LaunchFailed`] when the program could not be
    /// started at all; path resolution relies on that to move on to the next
    /// candidate.
    fn launch(
        &mut self,
        program: &Path,
        argv: &[&str],
        env: &Environment,
    ) -> Result<Termination, ShellError>;
}

/// Command that runs inside the interpreter process instead of as a child.
pub trait Builtin {
    /// Name the command is invoked by, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Runs the builtin. `argv[0]` is the builtin's own name.
    fn execute(&self, argv: &[&str]) -> Result<(), ShellError>;
}
