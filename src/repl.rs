// repl.rs

use std::io;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use cli_history::{HistoryBuffer, ShellConfig};
use log::info;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor, EventHandler, KeyCode, KeyEvent, Modifiers};

use crate::builtins::{run_builtin, Flow};
use crate::completion::BuiltinCompleter;
use crate::navigation::{lock, HistoryDown, HistoryUp, SharedHistory};

/// Runs the prompt loop and returns the exit code.
pub fn start_repl(config: &ShellConfig) -> Result<i32> {
    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<BuiltinCompleter, DefaultHistory> =
        Editor::with_config(rl_config).context("failed to create line editor")?;
    rl.set_helper(Some(BuiltinCompleter::new()));

    let history: SharedHistory = Arc::new(Mutex::new(HistoryBuffer::new(config.history_size)));
    rl.bind_sequence(
        KeyEvent(KeyCode::Up, Modifiers::NONE),
        EventHandler::Conditional(Box::new(HistoryUp::new(Arc::clone(&history)))),
    );
    rl.bind_sequence(
        KeyEvent(KeyCode::Down, Modifiers::NONE),
        EventHandler::Conditional(Box::new(HistoryDown::new(Arc::clone(&history)))),
    );
    info!("session started, keeping {} history lines", config.history_size);

    let mut stdout = io::stdout();
    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                {
                    let mut hist = lock(&history);
                    // A blank submit still has to close an open browse.
                    if !trimmed.is_empty() || hist.cursor().is_some() {
                        hist.new_command(trimmed);
                    }
                }
                if trimmed.is_empty() {
                    continue;
                }
                let flow = run_builtin(trimmed, &history, &mut stdout)
                    .context("failed to write command output")?;
                if let Flow::Exit(code) = flow {
                    info!("exit requested with code {code}");
                    return Ok(code);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                info!("input closed");
                return Ok(0);
            }
            Err(err) => return Err(err).context("failed to read input line"),
        }
    }
}
