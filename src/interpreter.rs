use crate::builtin::{Cd, Dispatch, dispatch_builtin};
use crate::command::{Builtin, ExitCode, Launcher};
use crate::config::Config;
use crate::env::Environment;
use crate::error::ShellError;
use crate::expand::expand;
use crate::external::{ProcessLauncher, resolve_and_run};
use crate::lexer;
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// Command that ends the interactive loop.
const EXIT_COMMAND: &str = "exit";

/// A minimal shell-like interpreter that runs builtins in-process and
/// everything else as a child process.
///
/// The interpreter is the whole session state: the variables lines can see,
/// the status of the last program, the builtins, and the way programs are
/// launched. See [`Default`] for the stock setup.
///
/// Example
/// ```no_run
/// use dsh::Interpreter;
/// let mut sh = Interpreter::default();
/// let code = sh.execute_line("echo hello world").unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(sh.last_status(), 0);
/// ```
pub struct Interpreter {
    env: Environment,
    last_status: ExitCode,
    builtins: Vec<Box<dyn Builtin>>,
    launcher: Box<dyn Launcher>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of builtins and launcher.
    pub fn new(builtins: Vec<Box<dyn Builtin>>, launcher: Box<dyn Launcher>) -> Self {
        Self {
            env: Environment::new(),
            last_status: 0,
            builtins,
            launcher,
        }
    }

    /// Replace the environment view lines are expanded and resolved against.
    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Status of the last program that exited normally; 0 before any has.
    pub fn last_status(&self) -> ExitCode {
        self.last_status
    }

    /// Run one raw input line: tokenize, expand, then hand it to a builtin
    /// or launch it.
    ///
    /// Returns the status the session holds afterwards. A blank line or a
    /// builtin leaves it unchanged. On error the status is unchanged too.
    pub fn execute_line(&mut self, line: &str) -> Result<ExitCode, ShellError> {
        let tokens = lexer::tokenize(line);
        if tokens.is_empty() {
            return Ok(self.last_status);
        }
        let expanded = expand(&tokens, self.last_status, &self.env);
        let argv: Vec<&str> = expanded.iter().map(|token| &**token).collect();
        debug!(?argv, "expanded");
        self.run(&argv)
    }

    /// Run a single, already expanded command invocation.
    pub fn run(&mut self, argv: &[&str]) -> Result<ExitCode, ShellError> {
        if dispatch_builtin(&self.builtins, argv)? == Dispatch::Handled {
            return Ok(self.last_status);
        }
        let code = resolve_and_run(argv, &self.env, self.launcher.as_mut())?;
        debug!(status = code, "program exited");
        self.last_status = code;
        Ok(code)
    }

    /// Read-eval-print loop over the terminal.
    ///
    /// Ends on `exit`, end of input, or Ctrl-C at the prompt. Errors from a
    /// line are printed and the loop carries on.
    pub fn repl(&mut self, config: &Config) -> anyhow::Result<()> {
        // the editor switches the terminal in and out of raw mode around each read
        let mut rl = DefaultEditor::new().context("failed to set up line editor")?;

        loop {
            match rl.readline(&config.prompt) {
                Ok(line) => {
                    if config.history && !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    if is_exit(&line) {
                        debug!("exit requested");
                        break;
                    }
                    if let Err(e) = self.execute_line(&line) {
                        eprintln!("dsh: {e}");
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    debug!("end of input");
                    break;
                }
                Err(err) => return Err(err).context("failed to read line"),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the `cd` builtin that launches programs as
    /// child processes.
    fn default() -> Self {
        Self::new(vec![Box::new(Cd)], Box::new(ProcessLauncher))
    }
}

/// Whether `line` asks the session to end.
pub fn is_exit(line: &str) -> bool {
    matches!(lexer::tokenize(line).as_slice(), [only] if *only == EXIT_COMMAND)
}
