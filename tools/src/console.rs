use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

fn io_err(e: std::io::Error) -> String {
    format!("IO error: {}", e)
}

/// Whitespace separated words from a line based reader, so values can be
/// split over lines any way the user likes.
pub struct Words<R: BufRead> {
    src: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Words<R> {
    pub fn new(src: R) -> Self {
        Words { src, pending: VecDeque::new() }
    }

    pub fn next_word(&mut self) -> Result<String, String> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(word);
            }
            let mut line = String::new();
            if self.src.read_line(&mut line).map_err(io_err)? == 0 {
                return Err(format!("Unexpected end of input"));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn next_parsed<T: FromStr>(&mut self) -> Result<T, String> {
        let word = self.next_word()?;
        word.parse().map_err(|_| format!("Bad value: {}", word))
    }
}

/// Prompt for a count and then read that many elements.
pub fn read_elements<T, R, W>(words: &mut Words<R>, out: &mut W) -> Result<Vec<T>, String>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Enter the number of elements").map_err(io_err)?;
    out.flush().map_err(io_err)?;
    let n: i64 = words.next_parsed()?;
    if n < 0 {
        return Err(format!("Bad element count: {}", n));
    }
    writeln!(out, "Enter the elements").map_err(io_err)?;
    out.flush().map_err(io_err)?;
    (0..n).map(|_| words.next_parsed()).collect()
}

/// Push `elements` in order, reverse the stack and print it popping.
pub fn print_reversed<W: Write>(elements: Vec<i64>, out: &mut W) -> Result<(), String> {
    let mut stack = Vec::with_capacity(elements.len());
    for e in elements {
        stack.push(e);
    }
    taller::stack::reverse(&mut stack);
    writeln!(out, "OUTPUT").map_err(io_err)?;
    for e in taller::stack::drain_top(&mut stack) {
        writeln!(out, "{}", e).map_err(io_err)?;
    }
    Ok(())
}

pub fn print_served<W: Write>(customers: Vec<String>, out: &mut W) -> Result<(), String> {
    let mut queue: VecDeque<String> = customers.into_iter().collect();
    writeln!(out, "OUTPUT").map_err(io_err)?;
    taller::queue::serve_all(&mut queue, out).map_err(io_err)
}

pub fn print_eval<W: Write>(expr: &str, out: &mut W) -> Result<(), String> {
    writeln!(out, "OUTPUT").map_err(io_err)?;
    let written = match taller::evaluate(expr) {
        Err(e) => writeln!(out, "Eval error: {}", e),
        Ok(result) => writeln!(out, "{}", result),
    };
    written.map_err(io_err)
}

pub fn reverse_driver<R: BufRead, W: Write>(words: &mut Words<R>, out: &mut W) -> Result<(), String> {
    let elements = read_elements(words, out)?;
    print_reversed(elements, out)
}

pub fn serve_driver<R: BufRead, W: Write>(words: &mut Words<R>, out: &mut W) -> Result<(), String> {
    let customers = read_elements(words, out)?;
    print_served(customers, out)
}

pub fn eval_driver<R: BufRead, W: Write>(words: &mut Words<R>, out: &mut W) -> Result<(), String> {
    writeln!(out, "Enter the expression").map_err(io_err)?;
    out.flush().map_err(io_err)?;
    let expr = words.next_word()?;
    print_eval(&expr, out)
}

/// The three drivers one after the other over the same input.
pub fn run_all<R: BufRead, W: Write>(words: &mut Words<R>, out: &mut W) -> Result<(), String> {
    writeln!(out, "== reverse ==").map_err(io_err)?;
    reverse_driver(words, out)?;
    writeln!(out, "== serve ==").map_err(io_err)?;
    serve_driver(words, out)?;
    writeln!(out, "== eval ==").map_err(io_err)?;
    eval_driver(words, out)
}
