use clap::Parser;
use mathline::{interpreter::evaluator::core::Interpreter, parse_line};
use rustyline::{DefaultEditor, error::ReadlineError};

const GREEN_BOLD: &str = "\x1B[1m\x1B[32m";
const RED_BOLD: &str = "\x1B[1m\x1B[31m";
const ANSI_RESET: &str = "\x1B[0m";

/// mathline is an interactive evaluator for one-line arithmetic expressions
/// with variables and assignment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and print the result instead of starting
    /// the interactive prompt.
    #[arg(short, long)]
    eval: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut interpreter = Interpreter::new();

    if let Some(expression) = args.eval {
        if eval_and_print(&mut interpreter, &expression).is_err() {
            std::process::exit(1);
        }
        return;
    }

    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             eprintln!("Failed to initialize the terminal: {e}");
                                             std::process::exit(1);
                                         });

    loop {
        match editor.readline(&format!("{GREEN_BOLD}math -> {ANSI_RESET}")) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                if line.starts_with("_quit") {
                    println!("\n:) Bye...");
                    break;
                }

                let _ = editor.add_history_entry(line.as_str());
                let _ = eval_and_print(&mut interpreter, &line);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\n:) Bye...");
                break;
            },
            Err(e) => {
                eprintln!("{RED_BOLD}{e}{ANSI_RESET}");
                break;
            },
        }
    }
}

/// Runs one line through the pipeline and prints its outcome.
///
/// Parse errors print a diagnostic and nothing else; no evaluation is
/// attempted. Evaluation errors print a diagnostic followed by a `NaN`
/// result line, and the session stays usable. Successful evaluations print
/// the value.
fn eval_and_print(interpreter: &mut Interpreter,
                  line: &str)
                  -> Result<(), Box<dyn std::error::Error>> {
    let ast = match parse_line(line) {
        Ok(ast) => ast,
        Err(e) => {
            println!("{RED_BOLD}{e}{ANSI_RESET}");
            return Err(Box::new(e));
        },
    };

    match interpreter.eval(ast.as_ref()) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        },
        Err(e) => {
            println!("{RED_BOLD}{e}{ANSI_RESET}");
            println!("{}", f32::NAN);
            Err(Box::new(e))
        },
    }
}
