//! Textual artifacts: the lexeme table, the persistable lexeme list, and
//! the symbol table dump. All line-oriented, tab or space separated.

use thiserror::Error;

use crate::analyzer::{SymbolKind, SymbolTable};
use crate::lexer::{Token, TokenKind};

/// A persisted lexeme list that cannot be read back.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Malformed lexeme list near '{0}'.")]
pub struct LexemeListError(pub String);

/// One lexeme/code pair per line, with a header.
pub fn lexeme_table(tokens: &[Token]) -> String {
    let mut out = String::from("lexeme\t\ttoken type\n");
    for token in tokens {
        out.push_str(&format!("{}\t\t{}\n", token.kind, token.kind.code()));
    }
    out
}

/// Token codes on one line; identifiers and numbers keep their lexeme next
/// to the code so the sequence can be re-read.
pub fn lexeme_list(tokens: &[Token]) -> String {
    let mut parts = vec![];
    for token in tokens {
        parts.push(token.kind.code().to_string());
        if matches!(token.kind, TokenKind::Ident(_) | TokenKind::Num(_)) {
            parts.push(token.kind.to_string());
        }
    }
    let mut line = parts.join(" ");
    line.push('\n');
    line
}

/// Reads a persisted lexeme list back into the token sequence it encodes.
pub fn read_lexeme_list(text: &str) -> Result<Vec<Token>, LexemeListError> {
    let mut tokens = vec![];
    let mut words = text.split_whitespace();

    while let Some(word) = words.next() {
        let code: u8 = word
            .parse()
            .map_err(|_| LexemeListError(word.to_string()))?;
        let kind = match code {
            2 => {
                let name = words
                    .next()
                    .ok_or_else(|| LexemeListError(word.to_string()))?;
                TokenKind::Ident(name.to_string())
            }
            3 => {
                let digits = words
                    .next()
                    .ok_or_else(|| LexemeListError(word.to_string()))?;
                let value = digits
                    .parse()
                    .map_err(|_| LexemeListError(digits.to_string()))?;
                TokenKind::Num(value)
            }
            other => match TokenKind::from_code(other) {
                Some(kind) => kind,
                None => return Err(LexemeListError(word.to_string())),
            },
        };
        tokens.push(Token { kind });
    }

    Ok(tokens)
}

/// Name, kind, level and value of every declaration, in insertion order.
/// Procedures leave the value column empty.
pub fn symbol_dump(symbols: &SymbolTable) -> String {
    let mut out = String::from("name\tkind\tlevel\tvalue\n");
    for symbol in symbols.iter() {
        let value = match symbol.kind {
            SymbolKind::Proc => String::new(),
            _ => symbol.val.to_string(),
        };
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            symbol.name, symbol.kind, symbol.level, value
        ));
    }
    out
}
