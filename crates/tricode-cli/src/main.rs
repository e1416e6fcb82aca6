use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tricode_vm::vm::MAX_CALL_DEPTH;
use tricode_vm::{compile, disassemble, RuntimeError, VmConfig, VM};

mod logger;
mod repl;
mod repl_helper;

/// Tricode - interpreter for the 3code language
#[derive(Parser, Debug)]
#[command(name = "tricode")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Interpreter for the 3code esoteric language",
    long_about = "Tricode runs 3code programs: integer accumulator, six registers, \
                  bracketed calls and user functions of up to three parameters.\n\n\
                  Run a file, read a program from stdin with `-`, or use -i for an \
                  interactive session."
)]
struct Cli {
    /// Program to run; `-` reads it from standard input
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// After running FILE (if any), start the interactive interpreter
    #[arg(short, long)]
    interactive: bool,

    /// Maximum depth of nested user function calls
    #[arg(long, value_name = "N", default_value_t = MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Print the disassembled bytecode of FILE instead of running it
    #[arg(long, conflicts_with = "emit_json")]
    dump_bytecode: bool,

    /// Print the compiled bytecode of FILE as JSON instead of running it
    #[arg(long)]
    emit_json: bool,

    /// Log to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.file.is_none() && !cli.interactive {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    }

    let config = VmConfig {
        max_call_depth: cli.max_call_depth,
    };
    let mut vm = VM::new().with_config(config);

    if let Some(path) = &cli.file {
        let source = read_source(path)?;

        let code = match compile(&source) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Syntax Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        };

        if cli.dump_bytecode {
            print!("{}", disassemble(&code, path));
            return Ok(ExitCode::SUCCESS);
        }
        if cli.emit_json {
            println!("{}", code.to_json()?);
            return Ok(ExitCode::SUCCESS);
        }

        let cancel = interrupt_flag();
        match vm.execute_cancellable(code, &cancel) {
            Ok(()) => {}
            // An interrupted program still hands over to the interactive loop
            Err(RuntimeError::Aborted) => eprintln!("Runtime Error: {}", RuntimeError::Aborted),
            Err(err) => {
                eprintln!("Runtime Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    if cli.interactive {
        let cancel = interrupt_flag();
        repl::run(&mut vm, &cancel)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Flag raised by Ctrl-C while a program runs
///
/// The handler is installed once per process; later calls share its flag.
fn interrupt_flag() -> Arc<AtomicBool> {
    static FLAG: std::sync::OnceLock<Arc<AtomicBool>> = std::sync::OnceLock::new();

    Arc::clone(FLAG.get_or_init(|| {
        let flag = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&flag);
        if let Err(err) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed)) {
            log::warn!("cannot install the Ctrl-C handler: {}", err);
        }
        flag
    }))
}

fn read_source(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Cannot read file: -")?;
        return Ok(source);
    }

    fs::read_to_string(path).with_context(|| format!("Cannot read file: {}", path))
}
