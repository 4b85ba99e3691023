use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap_stdin::MaybeStdin;
use tracing::Level;

use pl0c::lexer::{strip_comments, Lexer};
use pl0c::tables;

/// Front end for a small Pascal-like language: checks that a program is
/// lexically and grammatically correct and resolves every identifier.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Program text; pass `-` to read it from stdin
    source: MaybeStdin<String>,

    /// Write the lexeme table (lexeme/code pairs) to this file
    #[arg(long, value_name = "PATH")]
    lexeme_table: Option<PathBuf>,

    /// Write the lexeme list (persistable token sequence) to this file
    #[arg(long, value_name = "PATH")]
    lexeme_list: Option<PathBuf>,

    /// Write the resolved symbol table to this file
    #[arg(long, value_name = "PATH")]
    symbols: Option<PathBuf>,

    /// Log the scanner and parser as they work
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cleaned = strip_comments(&args.source)?;
    let tokens = Lexer::tokenize(&cleaned)?;

    if let Some(path) = &args.lexeme_table {
        fs::write(path, tables::lexeme_table(&tokens))?;
    }
    if let Some(path) = &args.lexeme_list {
        fs::write(path, tables::lexeme_list(&tokens))?;
    }

    let symbols = pl0c::parser::Parser::new(tokens).parse()?;

    if let Some(path) = &args.symbols {
        fs::write(path, tables::symbol_dump(&symbols))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => {
            println!("The program is grammatically correct.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
