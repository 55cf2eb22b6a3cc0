use anyhow::Context;
use clap::Parser;
use expr_eval::{evaluate_traced, format_number, DEFAULT_PRECISION, MAX_PRECISION};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[clap(short, long, action = clap::ArgAction::Count,
           help = "show more in logs, may be provided multiple times")]
    verbose: u8,
    #[clap(short, long, action, help = "print every reduction made while evaluating")]
    steps: bool,
    #[clap(short, long, default_value_t = DEFAULT_PRECISION as u16,
           value_parser = clap::value_parser!(u16).range(1..=MAX_PRECISION as i64),
           help = "significant digits in printed numbers")]
    precision: u16,
    #[clap(help = "expressions to evaluate, read from stdin one per line when none are given; \
           put `--` before any that start with a minus sign")]
    exprs: Vec<String>,
}

struct Options {
    steps: bool,
    precision: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level_filter = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("creating logger")?;

    let options = Options {
        steps: args.steps,
        precision: usize::from(args.precision),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.exprs.is_empty() {
        info!("no expressions on the command line, starting the shell");
        return run_shell(io::stdin().lock(), &mut out, &options);
    }

    let failures = run_exprs(&args.exprs, &mut out, &options)?;
    if failures > 0 {
        warn!(failures, "some expressions did not evaluate");
        std::process::exit(1);
    }
    Ok(())
}

/// Evaluates each expression from the command line, returning how many failed.
fn run_exprs(exprs: &[String], out: &mut impl Write, options: &Options) -> io::Result<usize> {
    let mut failures = 0;
    for expr in exprs {
        writeln!(out, "Question: {expr}")?;
        if !print_evaluation(out, expr, options)? {
            failures += 1;
        }
    }
    Ok(failures)
}

/// Reads expressions until `q` or end of input.
fn run_shell(input: impl BufRead, out: &mut impl Write, options: &Options) -> anyhow::Result<()> {
    writeln!(out, "=== Syntax-Directed Arithmetic Evaluator ===\n")?;
    let mut lines = input.lines();
    loop {
        write!(out, "Enter an arithmetic expression (or 'q' to quit):\n> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("reading expression")?;
        if line.is_empty() {
            writeln!(out, "No expression entered. Please try again.\n")?;
            continue;
        }
        if line == "q" || line == "Q" {
            break;
        }
        writeln!(out, "\nQuestion: {line}")?;
        print_evaluation(out, &line, options)?;
        writeln!(out)?;
    }
    writeln!(out, "Thank you for using the evaluator!")?;
    Ok(())
}

/// Returns whether the expression evaluated.
fn print_evaluation(out: &mut impl Write, expr: &str, options: &Options) -> io::Result<bool> {
    match evaluate_traced(expr) {
        Ok(evaluation) => {
            if options.steps {
                for step in &evaluation.steps {
                    writeln!(out, "Step: {:.*}", options.precision, step)?;
                }
            }
            let value = format_number(evaluation.value, options.precision);
            writeln!(out, "Final Result: {value}")?;
            Ok(true)
        }
        Err(diag) => {
            writeln!(out, "Syntax error in expression.")?;
            writeln!(out, "{diag}")?;
            Ok(false)
        }
    }
}
