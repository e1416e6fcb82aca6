//! Interactive interpreter
//!
//! Every line is compiled on its own and executed against one persistent VM,
//! so registers and function definitions carry over from line to line.

use crate::repl_helper::ReplHelper;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tricode_vm::{compile, VM};

const PROMPT: &str = ">>> ";

/// Meta commands and their help lines
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "show this message."),
    ("reset", "clear all user-defined functions and states."),
    ("exit", "terminate interactive interpreter."),
];

/// Accepted as an alias of `exit`
const QUIT: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplAction {
    Continue,
    Exit,
}

/// Read lines until `:exit`, Ctrl-D or Ctrl-C at the prompt
///
/// Setting `cancel` while a line runs aborts that line only.
pub fn run<W: Write>(vm: &mut VM<W>, cancel: &AtomicBool) -> anyhow::Result<()> {
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    let mut stdout = io::stdout();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if evaluate_line(vm, &line, cancel, &mut stdout)? == ReplAction::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Handle one input line, writing diagnostics to `report`
pub fn evaluate_line<W: Write>(
    vm: &mut VM<W>,
    line: &str,
    cancel: &AtomicBool,
    report: &mut impl Write,
) -> io::Result<ReplAction> {
    if let Some(command) = line.strip_prefix(':') {
        return run_command(vm, command, report);
    }

    let code = match compile(line) {
        Ok(code) => code,
        Err(err) => {
            writeln!(report, "Syntax Error: {}", err.message())?;
            return Ok(ReplAction::Continue);
        }
    };

    // A Ctrl-C that arrived between lines must not abort this one
    cancel.store(false, Ordering::Relaxed);
    if let Err(err) = vm.execute_cancellable(code, cancel) {
        writeln!(report, "Runtime Error: {}", err)?;
    }
    Ok(ReplAction::Continue)
}

fn run_command<W: Write>(
    vm: &mut VM<W>,
    command: &str,
    report: &mut impl Write,
) -> io::Result<ReplAction> {
    let name = command
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match name.as_str() {
        "help" => {
            for (command, description) in COMMANDS {
                writeln!(report, ":{:<8}{}", command, description)?;
            }
        }
        "reset" => vm.reset(),
        "exit" | QUIT => return Ok(ReplAction::Exit),
        _ => {
            writeln!(
                report,
                "Runtime Error: invalid command. type :help for all list of commands."
            )?;
            if let Some(suggestion) = suggest_command(&name) {
                writeln!(report, "did you mean ':{}'?", suggestion)?;
            }
        }
    }
    Ok(ReplAction::Continue)
}

/// Closest known command to a mistyped one
fn suggest_command(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }

    command_names()
        .map(|command| (strsim::jaro_winkler(command, name), command))
        .filter(|(score, _)| *score > 0.7)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, command)| command)
}

/// All command names, aliases included
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS
        .iter()
        .map(|(command, _)| *command)
        .chain(std::iter::once(QUIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;
    use tricode_vm::Register;

    fn session() -> VM<Vec<u8>> {
        VM::with_output(Vec::new())
    }

    fn eval(vm: &mut VM<Vec<u8>>, line: &str) -> (ReplAction, String) {
        let mut report = Vec::new();
        let action = evaluate_line(vm, line, &AtomicBool::new(false), &mut report).unwrap();
        (action, String::from_utf8(report).unwrap())
    }

    #[test]
    fn test_state_survives_between_lines() {
        let mut vm = session();
        eval(&mut vm, "F sq 1 *[i i]");
        eval(&mut vm, "7 =y");
        let (action, report) = eval(&mut vm, "println[sq[y]]");
        assert_eq!(action, ReplAction::Continue);
        assert_eq!(report, "");
        assert_eq!(String::from_utf8_lossy(vm.output()), "49\n");
    }

    #[test]
    fn test_syntax_error_has_no_line_number() {
        let mut vm = session();
        let (_, report) = eval(&mut vm, "+[1 2");
        assert_eq!(report, "Syntax Error: incomplete function call\n");
    }

    #[test]
    fn test_runtime_error_is_reported() {
        let mut vm = session();
        let (action, report) = eval(&mut vm, "nope[]");
        assert_eq!(action, ReplAction::Continue);
        assert_eq!(report, "Runtime Error: function 'nope' is not defined.\n");
    }

    #[test]
    fn test_reset_command() {
        let mut vm = session();
        eval(&mut vm, "3 =x");
        eval(&mut vm, "F one 0 1");
        eval(&mut vm, ":reset");
        assert_eq!(vm.register(Register::X), 0);
        assert!(!vm.is_defined("one"));
    }

    #[test]
    fn test_help_and_exit() {
        let mut vm = session();
        let (action, report) = eval(&mut vm, ":help");
        assert_eq!(action, ReplAction::Continue);
        assert_eq!(
            report,
            ":help    show this message.\n\
             :reset   clear all user-defined functions and states.\n\
             :exit    terminate interactive interpreter.\n"
        );
        assert_eq!(eval(&mut vm, ":exit").0, ReplAction::Exit);
        assert_eq!(eval(&mut vm, ":QUIT").0, ReplAction::Exit);
    }

    #[test]
    fn test_unknown_command() {
        let mut vm = session();
        let (_, report) = eval(&mut vm, ":rest");
        assert!(report.starts_with("Runtime Error: invalid command."));
        assert!(report.contains("did you mean ':reset'?"));

        let (_, report) = eval(&mut vm, ":");
        assert_eq!(
            report,
            "Runtime Error: invalid command. type :help for all list of commands.\n"
        );
    }

    #[test]
    fn test_interrupt_aborts_running_line() {
        let mut vm = session();
        eval(&mut vm, "F fib 1 <[i 2] then i else +[fib[-[i 1]] fib[-[i 2]]] ?");

        let cancel = AtomicBool::new(false);
        let mut report = Vec::new();
        let action = thread::scope(|scope| {
            scope.spawn(|| {
                thread::sleep(Duration::from_millis(50));
                cancel.store(true, Ordering::Relaxed);
            });
            evaluate_line(&mut vm, "println[fib[80]]", &cancel, &mut report).unwrap()
        });

        assert_eq!(action, ReplAction::Continue);
        assert_eq!(String::from_utf8(report).unwrap(), "Runtime Error: aborted.\n");
        assert!(vm.output().is_empty());
        assert!(vm.is_defined("fib"));
    }

    #[test]
    fn test_stale_interrupt_is_cleared() {
        let mut vm = session();
        let cancel = AtomicBool::new(true);
        let mut report = Vec::new();
        evaluate_line(&mut vm, "println[5]", &cancel, &mut report).unwrap();
        assert!(report.is_empty());
        assert_eq!(String::from_utf8_lossy(vm.output()), "5\n");
    }
}
