use std::env;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use minibf::cli_util::print_error;
use minibf::{EofBehavior, Error, Interpreter, load_program, validate};

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [OPTIONS] <PATH>   # Run the Brainfuck program stored in PATH

Options:
  --eof <MODE>        What ',' stores on end of input: zero, unchanged, all-ones (default: all-ones)
  --max-steps <N>     Abort after N executed instructions (default: unlimited)
  --debug,   -d       Trace every executed instruction to stderr
  --verbose, -v       Log loading and validation details to stderr
  --help,    -h       Show this help

Notes:
- The tape has {1} cells, all starting at 0. Moving the cursor off either end is an error.
- Cells wrap modulo 256.
- Any byte other than ><+-.,[] is a comment.
- RUST_LOG overrides the log level chosen by --debug/--verbose.
"#,
        program,
        minibf::TAPE_LEN
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bf", disable_help_flag = true)]
struct Cli {
    /// Path to the Brainfuck source file
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// What ',' stores when input is exhausted
    #[arg(long = "eof", value_enum, default_value_t = EofBehavior::AllOnes)]
    eof: EofBehavior,

    /// Abort after N executed instructions
    #[arg(long = "max-steps", value_name = "N")]
    max_steps: Option<usize>,

    /// Trace every executed instruction to stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Log loading and validation details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,
}

fn init_logging(debug: bool, verbose: bool) {
    let level = if debug {
        "trace"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(program: &str, cli: Cli) -> i32 {
    if cli.help {
        usage_and_exit(program, 0);
    }

    let Some(path) = cli.path else {
        eprintln!("{program}: No source file was given!");
        usage_and_exit(program, 1);
    };

    let code = match load_program(&path) {
        Ok(code) => code,
        Err(err) => {
            print_error(program, &[], &Error::from(err));
            return 1;
        }
    };

    if let Err(err) = validate(&code) {
        print_error(program, &code, &Error::from(err));
        return 1;
    }

    let stdout = BufWriter::new(io::stdout().lock());
    let mut bf = Interpreter::new(&code, io::stdin().lock(), stdout);
    bf.set_eof_behavior(cli.eof);
    bf.set_max_steps(cli.max_steps);

    if let Err(err) = bf.run() {
        print_error(program, &code, &Error::from(err));
        return 1;
    }

    0
}

fn main() {
    // Keep just the file name so messages read "bf: ..." however we were invoked.
    let program = env::args()
        .next()
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| String::from("bf"));

    let cli = Cli::parse();
    init_logging(cli.debug, cli.verbose);

    let code = run(&program, cli);
    std::process::exit(code);
}
