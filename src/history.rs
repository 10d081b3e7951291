// history.rs

use std::collections::VecDeque;
use std::fmt;
use std::io::{Result, Write};

use log::{debug, trace};

use crate::util::{flush_ignore_broken_pipe, writeln_ignore_broken_pipe};

/// Whether new input extends the history or replays existing entries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Inserting,
    /// `cursor` indexes the entry currently shown in the edit line.
    Browsing { cursor: usize },
}

/// Bounded command history navigated with up/down arrows.
///
/// Entries are kept most recent first. Stepping back from a fresh prompt
/// stores the in-progress line as the newest entry so it can be returned to,
/// and edits made while browsing are written back into the browsed slot.
///
/// A capacity of zero keeps no history: commands are dropped and browsing
/// hands the edit line straight back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HistoryBuffer {
    capacity: usize,
    entries: VecDeque<String>,
    mode: Mode,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
            mode: Mode::Inserting,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Browsed position, `None` while inserting.
    pub fn cursor(&self) -> Option<usize> {
        match self.mode {
            Mode::Inserting => None,
            Mode::Browsing { cursor } => Some(cursor),
        }
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Commits a submitted line and goes back to inserting.
    ///
    /// While browsing the line replaces the browsed entry instead of being
    /// added again.
    pub fn new_command(&mut self, item: impl Into<String>) {
        let item = item.into();
        match self.mode {
            Mode::Browsing { cursor } => {
                debug!("history: overwriting entry {cursor} and leaving browse mode");
                self.entries[cursor] = item;
            }
            Mode::Inserting => self.push_front(item),
        }
        self.mode = Mode::Inserting;
        self.check_invariants();
    }

    /// Steps toward older entries and returns the one now under the cursor.
    ///
    /// `line` is the current edit line. From a fresh prompt it becomes the
    /// newest entry; while browsing it overwrites the browsed entry. The
    /// cursor stops at the oldest entry.
    pub fn previous(&mut self, line: impl Into<String>) -> String {
        let line = line.into();
        let cursor = match self.mode {
            Mode::Inserting => {
                if self.capacity == 0 {
                    return line;
                }
                self.push_front(line);
                debug!("history: entering browse mode over {} entries", self.entries.len());
                if self.entries.len() > 1 {
                    1
                } else {
                    0
                }
            }
            Mode::Browsing { cursor } => {
                self.entries[cursor] = line;
                if cursor + 1 < self.entries.len() {
                    cursor + 1
                } else {
                    cursor
                }
            }
        };
        self.mode = Mode::Browsing { cursor };
        self.check_invariants();
        self.entries[cursor].clone()
    }

    /// Steps toward newer entries and returns the one now under the cursor.
    ///
    /// Stops at the newest entry. Returns `None` when not browsing, in which
    /// case the edit line should be left alone.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        match self.mode {
            Mode::Inserting => None,
            Mode::Browsing { cursor } => {
                let cursor = cursor.saturating_sub(1);
                self.mode = Mode::Browsing { cursor };
                Some(self.entries[cursor].clone())
            }
        }
    }

    /// Writes every entry, one per line, between two blank lines.
    pub fn show<W: Write>(&self, mut out: W) -> Result<()> {
        writeln_ignore_broken_pipe(&mut out, "")?;
        for entry in &self.entries {
            writeln_ignore_broken_pipe(&mut out, entry)?;
        }
        writeln_ignore_broken_pipe(&mut out, "")?;
        flush_ignore_broken_pipe(&mut out)
    }

    fn push_front(&mut self, item: String) {
        self.entries.push_front(item);
        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                trace!("history: evicted {evicted:?}");
            }
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.entries.len() <= self.capacity);
        if let Mode::Browsing { cursor } = self.mode {
            debug_assert!(cursor < self.entries.len());
        }
    }
}

impl fmt::Display for HistoryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f)
    }
}
