use clap::{Parser, Subcommand};
use std::io::{self, Write};

mod console;
mod repl;

/// Stack reversal, queue serving and postfix evaluation workshop drivers.
/// Without a subcommand all three drivers run one after the other on stdin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reverse a stack of integers (read from stdin when none given)
    Reverse {
        #[arg(allow_negative_numbers = true)]
        elements: Vec<i64>,
    },
    /// Serve a queue of customers (read from stdin when none given)
    Serve { customers: Vec<String> },
    /// Evaluate a single digit postfix expression, eg: 32+4*
    /// Starts a REPL when no expression is given
    Eval { expr: Option<String> },
}

fn main() -> Result<(), String> {
    let command = match Args::parse().command {
        // the REPL owns the terminal, don't hold stdin locked
        Some(Command::Eval { expr: None }) => return repl::run(),
        command => command,
    };

    let stdin = io::stdin();
    let mut words = console::Words::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        None => console::run_all(&mut words, &mut out),
        Some(Command::Reverse { elements }) if elements.is_empty() => {
            console::reverse_driver(&mut words, &mut out)
        }
        Some(Command::Reverse { elements }) => console::print_reversed(elements, &mut out),
        Some(Command::Serve { customers }) if customers.is_empty() => {
            console::serve_driver(&mut words, &mut out)
        }
        Some(Command::Serve { customers }) => console::print_served(customers, &mut out),
        Some(Command::Eval { expr: Some(expr) }) => match taller::evaluate(&expr) {
            Err(e) => Err(format!("Eval error: {}", e)),
            Ok(result) => writeln!(out, "{}", result).map_err(|e| e.to_string()),
        },
        Some(Command::Eval { expr: None }) => repl::run(),
    }
}
