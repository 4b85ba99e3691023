pub mod analyzer;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod tables;

use analyzer::SymbolTable;
use error::CompileError;
use lexer::{strip_comments, Lexer};
use parser::Parser;

/// Checks `source` end to end and returns the resolved symbol table: the
/// raw text is stripped of comments, scanned, and parsed, with every
/// identifier use resolved to a visible declaration. The first lexical,
/// syntactic, or semantic fault aborts the run.
pub fn compile(source: &str) -> Result<SymbolTable, CompileError> {
    let cleaned = strip_comments(source)?;
    let tokens = Lexer::tokenize(&cleaned)?;

    let parser = Parser::new(tokens);
    let symbols = parser.parse()?;
    Ok(symbols)
}
