use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use reckon::Calculator;

/// reckon evaluates an arithmetic expression such as `(1+2)*sqrt(4)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Logs more detail; repeat for more (`-vv` shows tokens and postfix
    /// order). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression. Words are joined with single spaces. When omitted, one
    /// line is read from standard input.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("arguments: {:?}", args.expression);

    let expression = match read_expression(&args.expression, io::stdin().lock(), io::stdout()) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("Error reading expression: {e}");
            return ExitCode::FAILURE;
        },
    };

    match Calculator::new().evaluate_expression(&expression) {
        Ok(result) => {
            println!("{}", format_result(result));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error evaluating expression: {e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

/// Returns the expression from the command line, or prompts on `output` and
/// reads one line from `input`.
fn read_expression(words: &[String],
                   mut input: impl BufRead,
                   mut output: impl Write)
                   -> io::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    write!(output, "Enter an expression: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }

    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(line.to_string())
}

/// Formats a result for printing. Infinities are signed (`+Inf`, `-Inf`).
fn format_result(result: f64) -> String {
    if result == f64::INFINITY {
        "+Inf".to_string()
    } else if result == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        result.to_string()
    }
}
