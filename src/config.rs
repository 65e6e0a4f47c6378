use argh::FromArgs;

/// Prompt printed before every line, unless overridden.
pub const DEFAULT_PROMPT: &str = "# ";

#[derive(FromArgs, Debug, PartialEq)]
/// A minimal interactive command interpreter.
pub struct Args {
    #[argh(option, short = 'c')]
    /// run a single command line and exit with its status.
    pub command: Option<String>,

    #[argh(option, short = 'p')]
    /// prompt printed before each line. Defaults to "# ".
    pub prompt: Option<String>,

    #[argh(switch)]
    /// do not keep a history of entered lines.
    pub no_history: bool,
}

/// Settings for one interpreter session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Line to run instead of starting the interactive loop.
    pub command: Option<String>,
    pub prompt: String,
    /// Whether entered lines go into the line editor's history.
    pub history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: None,
            prompt: DEFAULT_PROMPT.to_string(),
            history: true,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            command: args.command,
            prompt: args.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            history: !args.no_history,
        }
    }
}
