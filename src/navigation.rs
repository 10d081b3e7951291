// navigation.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cli_history::HistoryBuffer;
use rustyline::{Cmd, ConditionalEventHandler, Event, EventContext, Movement, RepeatCount};

pub type SharedHistory = Arc<Mutex<HistoryBuffer>>;

pub fn lock(history: &Mutex<HistoryBuffer>) -> MutexGuard<'_, HistoryBuffer> {
    history.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Up arrow: hands the edit line to the history and shows the older entry.
pub struct HistoryUp {
    history: SharedHistory,
}

impl HistoryUp {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }
}

impl ConditionalEventHandler for HistoryUp {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, ctx: &EventContext) -> Option<Cmd> {
        Some(up(&self.history, ctx.line()))
    }
}

/// Down arrow: shows the newer entry, if browsing.
pub struct HistoryDown {
    history: SharedHistory,
}

impl HistoryDown {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }
}

impl ConditionalEventHandler for HistoryDown {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, _ctx: &EventContext) -> Option<Cmd> {
        Some(down(&self.history))
    }
}

fn up(history: &Mutex<HistoryBuffer>, line: &str) -> Cmd {
    replace_line(lock(history).previous(line))
}

// Noop keeps rustyline's own (unused) history out of the way.
fn down(history: &Mutex<HistoryBuffer>) -> Cmd {
    match lock(history).next() {
        Some(entry) => replace_line(entry),
        None => Cmd::Noop,
    }
}

fn replace_line(entry: String) -> Cmd {
    Cmd::Replace(Movement::WholeLine, Some(entry))
}
