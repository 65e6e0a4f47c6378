use crate::command::ExitCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while running one command line.
///
/// None of these end the session: the read loop reports them and moves on to
/// the next prompt.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A builtin was called with the wrong number of arguments.
    #[error("{builtin}: invalid arguments")]
    InvalidArgs { builtin: &'static str },

    /// The target of `cd` or of a direct-path command does not exist.
    #[error("'{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// The OS refused to change the working directory.
    #[error("cd: couldn't change directory to '{}': {source}", .path.display())]
    ChangeDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No direct path and no search path directory produced a running program.
    #[error("{0} is not a valid command")]
    CommandNotFound(String),

    /// A candidate executable could not be started.
    #[error("failed to launch {}: {source}", .path.display())]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Waiting on a started child failed.
    #[error("failed to wait for {}: {source}", .path.display())]
    WaitFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The child was killed by a signal instead of exiting.
    #[error("program did not exit properly{}", termination_detail(.signal, .core_dumped))]
    AbnormalTermination {
        signal: Option<i32>,
        core_dumped: bool,
    },
}

fn termination_detail(signal: &Option<i32>, core_dumped: &bool) -> String {
    let mut detail = signal.map(|s| format!(" (signal {s})")).unwrap_or_default();
    if *core_dumped {
        detail.push_str(", core dumped");
    }
    detail
}

impl ShellError {
    /// Status a non-interactive caller should exit with after this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShellError::CommandNotFound(_) | ShellError::PathNotFound(_) => 127,
            ShellError::LaunchFailed { .. } => 126,
            _ => 1,
        }
    }
}
