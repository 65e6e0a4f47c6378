use crate::command::Builtin;
use crate::error::ShellError;
use std::env;
use std::path::Path;
use tracing::debug;

/// Outcome of offering a command line to the builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A builtin ran the command.
    Handled,
    /// No builtin has this name; the command is an external program.
    NotBuiltin,
}

/// Offers `argv` to each builtin in order and runs the first whose name
/// matches `argv[0]`.
pub fn dispatch_builtin(
    builtins: &[Box<dyn Builtin>],
    argv: &[&str],
) -> Result<Dispatch, ShellError> {
    let Some(&name) = argv.first() else {
        return Ok(Dispatch::NotBuiltin);
    };
    match builtins.iter().find(|b| b.name() == name) {
        Some(builtin) => {
            debug!(builtin = name, "running builtin");
            builtin.execute(argv)?;
            Ok(Dispatch::Handled)
        }
        None => Ok(Dispatch::NotBuiltin),
    }
}

/// Change the current working directory: `cd <path>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, argv: &[&str]) -> Result<(), ShellError> {
        let [_, target] = argv else {
            return Err(ShellError::InvalidArgs { builtin: self.name() });
        };
        let target = Path::new(target);
        if !target.exists() {
            return Err(ShellError::PathNotFound(target.to_path_buf()));
        }
        env::set_current_dir(target).map_err(|source| ShellError::ChangeDirFailed {
            path: target.to_path_buf(),
            source,
        })?;
        debug!(cwd = %target.display(), "changed directory");
        Ok(())
    }
}
