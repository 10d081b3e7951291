// main.rs

mod builtins;
mod completion;
mod navigation;
mod repl;

use anyhow::{Context, Result};
use cli_history::ShellConfig;

fn main() -> Result<()> {
    env_logger::init();
    let config = ShellConfig::from_env().context("invalid shell configuration")?;
    let code = repl::start_repl(&config)?;
    std::process::exit(code)
}
