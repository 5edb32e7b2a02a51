//! Menu-driven interactive session for the sprout interpreter

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use sprout::{process_block, write_dot, Environment};

/// Interactive interpreter for integer declarations and scoped assignments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File the parse tree graph is written to after each processed block.
    #[arg(short, long, default_value = "parse_tree.dot")]
    output: PathBuf,
}

const MENU: &str = "\
1) Process statements
2) Declare variables
3) Display symbol table
4) Exit
5) Enter new scope
6) Exit scope
7) Reset state";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut rl = DefaultEditor::new()?;
    let mut env = Environment::new();

    println!("{MENU}");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let Ok(choice) = line.trim().parse::<u32>() else {
            eprintln!("Error: Invalid choice: unable to read integer.");
            continue;
        };

        match choice {
            1 | 2 => {
                let input = read_block(&mut rl)?;
                let result = process_block(&mut env, &input);
                for outcome in &result.outcomes {
                    println!("{outcome}");
                }
                if !result.trees.is_empty() {
                    write_dot(&result.trees, &args.output)?;
                }
            }
            3 => {
                for (name, binding) in env.bindings() {
                    println!(
                        "{name}\t{}\t{}\t{}",
                        binding.ty, binding.value, binding.scope_label
                    );
                }
            }
            4 => break,
            5 => {
                env.enter_scope();
                println!("New scope entered.");
            }
            6 => match env.exit_scope() {
                Ok(()) => println!("Scope exited."),
                Err(e) => eprintln!("Error: {e}"),
            },
            7 => {
                env.reset();
                println!("State reset.");
            }
            other => eprintln!("Error: Invalid choice: {other}"),
        }
    }

    Ok(())
}

/// Read statement lines until a blank line or end of input.
fn read_block(rl: &mut DefaultEditor) -> Result<String> {
    let mut input = String::new();
    loop {
        match rl.readline("") {
            Ok(line) => {
                if line.trim().is_empty() {
                    break;
                }
                let _ = rl.add_history_entry(&line);
                input.push_str(&line);
                input.push('\n');
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(input)
}
