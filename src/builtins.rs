// builtins.rs

use std::io::{self, Write};
use std::sync::Mutex;

use cli_history::util::writeln_ignore_broken_pipe;
use cli_history::HistoryBuffer;
use itertools::Itertools;

use crate::navigation::lock;

pub const BUILTINS: [&str; 5] = ["echo", "exit", "help", "history", "type"];

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub fn run_builtin<W: Write>(
    line: &str,
    history: &Mutex<HistoryBuffer>,
    out: &mut W,
) -> io::Result<Flow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => {}
        ["exit"] => return Ok(Flow::Exit(0)),
        ["exit", code] => match code.parse() {
            Ok(code) => return Ok(Flow::Exit(code)),
            Err(_) => writeln_ignore_broken_pipe(
                &mut *out,
                format!("exit: {code}: numeric argument required"),
            )?,
        },
        ["echo", args @ ..] => writeln_ignore_broken_pipe(&mut *out, args.iter().join(" "))?,
        ["history"] => lock(history).show(&mut *out)?,
        ["help"] => writeln_ignore_broken_pipe(
            &mut *out,
            format!("builtins: {}", BUILTINS.iter().join(" ")),
        )?,
        ["type", name] => {
            let msg = if BUILTINS.contains(name) {
                format!("{name} is a shell builtin")
            } else {
                format!("{name}: not found")
            };
            writeln_ignore_broken_pipe(&mut *out, msg)?
        }
        [other, ..] => {
            log::debug!("unknown command {other:?}");
            writeln_ignore_broken_pipe(&mut *out, format!("{other}: command not found"))?
        }
    }
    Ok(Flow::Continue)
}
