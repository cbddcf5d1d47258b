use rustyline::error::ReadlineError;
use taller::PostfixExpr;

/// One REPL line: echo the expression in infix form next to its value.
pub fn eval_line(input: &str) -> String {
    match PostfixExpr::parse_str(input.trim()) {
        Err(e) => format!("Parse error: {}", e),
        Ok(expr) => match expr.eval() {
            Err(e) => format!("Eval error: {}", e),
            Ok(result) => format!("{} = {}", expr, result),
        },
    }
}

pub fn run() -> Result<(), String> {
    let histpath = dirs::home_dir().map(|h| h.join(".taller_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                println!("{}", eval_line(&line));
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
