use crate::command::{ExitCode, Launcher, Termination};
use crate::env::Environment;
use crate::error::ShellError;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

/// Directories scanned, in order, to find a program given by bare name.
///
/// Built from the `:`-separated `PATH` value. Every entry ends with a path
/// separator so that a candidate is simply `entry + name`. Empty entries are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    /// Splits a `PATH` value on `:`.
    pub fn parse(value: &str) -> Self {
        let dirs = value
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| {
                let mut dir = dir.to_owned();
                if !dir.ends_with(MAIN_SEPARATOR) {
                    dir.push(MAIN_SEPARATOR);
                }
                dir
            })
            .collect();
        Self { dirs }
    }

    /// Reads `PATH` from `env`. A missing `PATH` gives an empty search path.
    pub fn from_env(env: &Environment) -> Self {
        env.get_var("PATH")
            .map(|value| Self::parse(&value))
            .unwrap_or_else(|| Self { dirs: Vec::new() })
    }

    /// Directories in search order, each ending with a separator.
    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// Paths at which `name` would live, one per directory, in search order.
    pub fn candidates<'a>(&'a self, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.dirs.iter().map(move |dir| PathBuf::from(format!("{dir}{name}")))
    }
}

/// Launches programs as child processes with `std::process::Command`.
///
/// The child inherits the interpreter's standard streams and working
/// directory. Its environment is the session's: overlay variables are added
/// on top of the process environment, and an isolated view replaces it.
///
/// `program` must contain a separator; a bare name would make
/// `std::process::Command` search the process `PATH` on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(
        &mut self,
        program: &Path,
        argv: &[&str],
        env: &Environment,
    ) -> Result<Termination, ShellError> {
        let mut cmd = Command::new(program);
        set_arg0(&mut cmd, argv);
        cmd.args(argv.iter().skip(1));
        if !env.inherits() {
            cmd.env_clear();
        }
        cmd.envs(env.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let mut child = cmd.spawn().map_err(|source| ShellError::LaunchFailed {
            path: program.to_path_buf(),
            source,
        })?;
        debug!(program = %program.display(), pid = child.id(), "spawned");

        let exit_status = child.wait().map_err(|source| ShellError::WaitFailed {
            path: program.to_path_buf(),
            source,
        })?;
        Ok(termination(exit_status))
    }
}

#[cfg(unix)]
fn set_arg0(cmd: &mut Command, argv: &[&str]) {
    use std::os::unix::process::CommandExt;
    if let Some(arg0) = argv.first() {
        cmd.arg0(arg0);
    }
}

#[cfg(not(unix))]
fn set_arg0(_cmd: &mut Command, _argv: &[&str]) {}

fn termination(exit_status: ExitStatus) -> Termination {
    match exit_status.code() {
        Some(code) => Termination::Exited(code),
        None => terminated_by_signal(exit_status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> Termination {
    use std::os::unix::process::ExitStatusExt;
    Termination::Signaled {
        signal: exit_status.signal(),
        core_dumped: exit_status.core_dumped(),
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> Termination {
    Termination::Signaled {
        signal: None,
        core_dumped: false,
    }
}

/// Finds the program named by `argv[0]`, runs it, and returns its exit code.
///
/// Behavior:
/// - A name containing a path separator is run as given; if it does not
///   exist the result is [`ShellError::PathNotFound`].
/// - A bare name that is a regular file in the current directory is tried
///   first.
/// - Otherwise each `PATH` directory is tried in order and the first
///   candidate that starts wins. A candidate that exists but fails to start
///   is skipped, never retried.
/// - When nothing starts, the result is [`ShellError::CommandNotFound`].
///
/// A program killed by a signal yields [`ShellError::AbnormalTermination`].
pub fn resolve_and_run<L>(
    argv: &[&str],
    env: &Environment,
    launcher: &mut L,
) -> Result<ExitCode, ShellError>
where
    L: Launcher + ?Sized,
{
    let Some(&name) = argv.first() else {
        return Err(ShellError::CommandNotFound(String::new()));
    };

    if name.contains(MAIN_SEPARATOR) || name.contains('/') {
        let path = Path::new(name);
        if !path.exists() {
            return Err(ShellError::PathNotFound(path.to_path_buf()));
        }
        return run_candidate(launcher, path, argv, env);
    }

    // "./name", never the bare name, so the launcher cannot search on its own
    let local = Path::new(".").join(name);
    if local.is_file() {
        match run_candidate(launcher, &local, argv, env) {
            Err(ShellError::LaunchFailed { path, source }) => {
                warn!(path = %path.display(), error = %source, "launch failed, searching PATH");
            }
            other => return other,
        }
    }

    // PATH is re-read for every command, never cached.
    let search_path = SearchPath::from_env(env);
    for candidate in search_path.candidates(name) {
        if !candidate.is_file() {
            continue;
        }
        match run_candidate(launcher, &candidate, argv, env) {
            Err(ShellError::LaunchFailed { path, source }) => {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "launch failed, trying next PATH entry"
                );
            }
            other => return other,
        }
    }

    Err(ShellError::CommandNotFound(name.to_owned()))
}

fn run_candidate<L>(
    launcher: &mut L,
    path: &Path,
    argv: &[&str],
    env: &Environment,
) -> Result<ExitCode, ShellError>
where
    L: Launcher + ?Sized,
{
    debug!(path = %path.display(), ?argv, "launching");
    match launcher.launch(path, argv, env)? {
        Termination::Exited(code) => Ok(code),
        Termination::Signaled { signal, core_dumped } => {
            Err(ShellError::AbnormalTermination { signal, core_dumped })
        }
    }
}
