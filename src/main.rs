use dsh::{Interpreter, is_exit};
use dsh::config::{Args, Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing with env filter (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from(argh::from_env::<Args>());
    let mut sh = Interpreter::default();

    match &config.command {
        Some(line) if is_exit(line) => std::process::exit(sh.last_status()),
        Some(line) => {
            let code = match sh.execute_line(line) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("dsh: {e}");
                    e.exit_code()
                }
            };
            std::process::exit(code)
        }
        None => sh.repl(&config),
    }
}
