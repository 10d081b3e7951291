// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::builtins::BUILTINS;

pub struct BuiltinCompleter;

impl BuiltinCompleter {
    pub fn new() -> Self {
        Self
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        // Only the command word is completed.
        if prefix.contains(char::is_whitespace) {
            return Vec::new();
        }
        BUILTINS
            .iter()
            .filter(|b| b.starts_with(prefix))
            .map(|b| Pair {
                display: b.to_string(),
                replacement: format!("{} ", b),
            })
            .collect()
    }
}

impl Completer for BuiltinCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok((0, self.candidates(&line[..pos])))
    }
}

impl Hinter for BuiltinCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for BuiltinCompleter {}

impl Validator for BuiltinCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for BuiltinCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str) -> Vec<String> {
        BuiltinCompleter::new()
            .candidates(prefix)
            .into_iter()
            .map(|p| p.replacement)
            .collect()
    }

    #[test]
    fn completes_command_word() {
        assert_eq!(names("e"), ["echo ", "exit "]);
        assert_eq!(names("hi"), ["history "]);
        assert!(names("zz").is_empty());
    }

    #[test]
    fn ignores_arguments() {
        assert!(names("echo e").is_empty());
    }
}
