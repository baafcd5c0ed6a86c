//! # Terminal drill session
//!
//! A minimal session layer over the question engine: builds a spec from
//! command line options, generates a batch, prompts on stdin and prints a
//! score with a recap of the mistakes. An answer that cannot be read as a
//! number is re-prompted without counting an attempt.
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::exit;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rexd::check::{self, Outcome};
use rexd::data::elements::{Comparison, OperandKind, Operator};
use rexd::generate::{self, OperandSpec, QuestionSpec};

#[derive(Parser)]
#[clap(name = "rexd", about = "Arithmetic drill over exact fractions")]
struct Options {
    /// Operator: multiply, divide, sum or difference.
    #[clap(long, value_parser, default_value = "sum")]
    operator: Operator,
    /// Kind of the first operand: positiveinteger, negativeinteger or
    /// properfraction.
    #[clap(long, value_parser, default_value = "positiveinteger")]
    kind_a: OperandKind,
    /// Inclusive lower bound of the first operand's range.
    #[clap(long, value_parser, default_value_t = 1)]
    min_a: i64,
    /// Inclusive upper bound of the first operand's range.
    #[clap(long, value_parser, default_value_t = 10)]
    max_a: i64,
    /// Kind of the second operand.
    #[clap(long, value_parser, default_value = "positiveinteger")]
    kind_b: OperandKind,
    /// Inclusive lower bound of the second operand's range.
    #[clap(long, value_parser, default_value_t = 1)]
    min_b: i64,
    /// Inclusive upper bound of the second operand's range.
    #[clap(long, value_parser, default_value_t = 10)]
    max_b: i64,
    /// Ordering constraint on the operands: any, firstgreater or firstless.
    #[clap(long, value_parser, default_value = "any")]
    comparison: Comparison,
    /// Number of questions in the session.
    #[clap(long, value_parser, default_value_t = 10)]
    count: usize,
    /// Seed for a reproducible session; drawn from the OS when absent.
    #[clap(long, value_parser)]
    seed: Option<u64>,
}

fn main() {
    let options = Options::parse();

    if let Err(error) = run(&options) {
        eprintln!("{}", error);
        exit(1);
    }
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let spec = QuestionSpec::new(
        options.operator,
        OperandSpec::new(options.kind_a, options.min_a, options.max_a)?,
        OperandSpec::new(options.kind_b, options.min_b, options.max_b)?,
        options.comparison,
    );

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = generate::questions(&mut rng, &spec, options.count)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut correct = 0;
    let mut total = 0;
    let mut mistakes = Vec::new();

    'session: for question in &questions {
        loop {
            print!("{} = ", question.prompt);
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                // End of input ends the session early.
                None => break 'session,
            };

            match check::answer(question, &line) {
                Outcome::Correct => {
                    correct += 1;
                    total += 1;
                    println!("Correct.");
                    break;
                },
                Outcome::Incorrect => {
                    total += 1;
                    println!("Wrong: {} = {}", question.prompt, question.result);
                    mistakes.push((
                        question.prompt.clone(),
                        line.trim().to_string(),
                        question.result.to_string(),
                    ));
                    break;
                },
                Outcome::Unparseable => {
                    println!(
                        "Could not read that as a number; answer with an integer, \
                         a fraction \"a/b\" or a decimal.",
                    );
                },
            }
        }
    }

    println!();
    println!("Score: {}/{}", correct, total);

    if !mistakes.is_empty() {
        println!("Mistakes:");
        for (prompt, given, expected) in &mistakes {
            println!("    {} = {} (answered {})", prompt, expected, given);
        }
    }

    Ok(())
}
