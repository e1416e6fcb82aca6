use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tricode_vm::builtins::create_builtin_registry;

use crate::repl::command_names;

/// Tab completion of builtin names and meta commands
pub struct ReplHelper {
    builtins: Vec<String>,
}

impl ReplHelper {
    pub fn new() -> Self {
        let mut builtins: Vec<String> = create_builtin_registry()
            .iter()
            .map(|builtin| builtin.name.clone())
            .collect();
        builtins.sort();
        Self { builtins }
    }

    /// Start of the word being completed and its candidates
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];

        if let Some(command) = before.strip_prefix(':') {
            let pairs = command_names()
                .filter(|name| name.starts_with(command))
                .map(|name| Pair {
                    display: format!(":{}", name),
                    replacement: name.to_string(),
                })
                .collect();
            return (1, pairs);
        }

        let start = before
            .rfind(|c: char| c.is_whitespace() || c == '[' || c == ']')
            .map_or(0, |i| i + 1);
        let word = &before[start..];
        if word.is_empty() {
            return (pos, Vec::new());
        }

        let pairs = self
            .builtins
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        (start, pairs)
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}
