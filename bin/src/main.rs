use std::io::{stdin, stdout, BufRead, Write};

use clap::Parser;

use interpreter::{Interpreter, UndefinedVariables};
use pricing::Quote;

/// Prices a repair quote, optionally through an adjustment formula over
/// `p` (parts) and `l` (labor), e.g. `"l + p - p * 0.1"`.
#[derive(clap::Parser)]
struct Args {
    /// Price of the parts, bound to `p`.
    #[arg(short, long)]
    parts: f64,
    /// Price of the labor, bound to `l`.
    #[arg(short, long)]
    labor: f64,
    /// Evaluate unknown variables as 0 instead of failing.
    #[arg(long)]
    undefined_as_zero: bool,
    /// Adjustment formula. Without it, formulas are read from stdin one per line.
    adjustment: Option<String>,
}

fn run(quote: &Quote, interpreter: &Interpreter, output: &mut impl Write) -> anyhow::Result<()> {
    writeln!(output, "{}", quote.total_price_with(interpreter)?)?;
    Ok(())
}

fn run_prompt(
    mut quote: Quote,
    interpreter: &Interpreter,
    mut input: impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let adjustment = line.trim();
        quote.set_adjustments((!adjustment.is_empty()).then(|| adjustment.to_string()));
        match run(&quote, interpreter, output) {
            Ok(_) => (),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let policy = if args.undefined_as_zero {
        UndefinedVariables::Zero
    } else {
        UndefinedVariables::Reject
    };
    let interpreter = Interpreter::new().with_undefined_variables(policy);
    let quote = Quote::new(args.parts, args.labor);

    let mut output = stdout().lock();
    match args.adjustment {
        Some(adjustment) => run(&quote.with_adjustments(adjustment), &interpreter, &mut output),
        None => run_prompt(quote, &interpreter, stdin().lock(), &mut output),
    }
}
