use tracing::trace;

use crate::error::LexicalError;

use super::token::{Token, TokenKind, KEYWORDS, MAX_IDENT_LEN, MAX_NUM_LEN};

#[derive(Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    index: usize,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: vec![],
            index: 0,
        }
    }

    fn new_token(&mut self, kind: TokenKind, s: &str) {
        trace!(code = kind.code(), lexeme = %kind, "token");
        self.tokens.push(Token { kind });
        self.index += s.chars().count();
    }

    /// Reserved word or identifier: a letter or underscore followed by
    /// letters, underscores, and digits.
    fn parse_word(&mut self, chars: &[char]) -> Result<(), LexicalError> {
        let s: String = chars
            .iter()
            .take_while(|&&c| is_letter(c) || c.is_ascii_digit())
            .collect();

        if s.chars().count() > MAX_IDENT_LEN {
            return Err(LexicalError::IdentifierTooLong(s));
        }

        if let Some(kind) = KEYWORDS.get(s.as_str()) {
            self.new_token(kind.clone(), &s);
        } else {
            self.new_token(TokenKind::Ident(s.clone()), &s);
        }
        Ok(())
    }

    /// Number literal: a digit run with no letter directly after it.
    fn parse_number(&mut self, chars: &[char]) -> Result<(), LexicalError> {
        let s: String = chars.iter().take_while(|c| c.is_ascii_digit()).collect();

        if s.len() > MAX_NUM_LEN {
            return Err(LexicalError::NumberTooLong(s));
        }
        if let Some(&next) = chars.get(s.len()) {
            if is_letter(next) {
                return Err(LexicalError::IdentifierStartsWithDigit(s));
            }
        }

        let value = s.parse().unwrap();
        self.new_token(TokenKind::Num(value), &s);
        Ok(())
    }

    /// Operator or punctuation. `>` may extend to `>=`; `<` must be
    /// followed by `=`, `>`, or whitespace; `:` must be followed by `=`.
    fn parse_special(&mut self, chars: &[char]) -> Result<(), LexicalError> {
        match chars[0] {
            '+' => self.new_token(TokenKind::Plus, "+"),
            '-' => self.new_token(TokenKind::Minus, "-"),
            '*' => self.new_token(TokenKind::Star, "*"),
            '/' => self.new_token(TokenKind::Slash, "/"),
            '(' => self.new_token(TokenKind::LeftParen, "("),
            ')' => self.new_token(TokenKind::RightParen, ")"),
            ',' => self.new_token(TokenKind::Comma, ","),
            ';' => self.new_token(TokenKind::SemiColon, ";"),
            '=' => self.new_token(TokenKind::Equal, "="),
            '.' => self.new_token(TokenKind::Period, "."),
            '>' => {
                if chars.get(1) == Some(&'=') {
                    self.new_token(TokenKind::GreaterEqual, ">=");
                } else {
                    self.new_token(TokenKind::GreaterThan, ">");
                }
            }
            '<' => match chars.get(1) {
                Some('>') => self.new_token(TokenKind::NotEqual, "<>"),
                Some('=') => self.new_token(TokenKind::LessEqual, "<="),
                Some(&next) if next.is_whitespace() => {
                    self.new_token(TokenKind::LessThan, "<");
                }
                Some(&next) => {
                    return Err(LexicalError::UnknownSymbol(format!("<{next}")));
                }
                None => return Err(LexicalError::UnknownSymbol("<".to_string())),
            },
            ':' => {
                if chars.get(1) == Some(&'=') {
                    self.new_token(TokenKind::Becomes, ":=");
                } else {
                    return Err(LexicalError::EqualExpectedAfterColon);
                }
            }
            c => return Err(LexicalError::UnknownCharacter(c)),
        }
        Ok(())
    }

    fn run(&mut self, chars: &[char]) -> Result<(), LexicalError> {
        while self.index < chars.len() {
            let c = chars[self.index];
            if c.is_whitespace() {
                self.index += 1;
            } else if is_letter(c) {
                self.parse_word(&chars[self.index..])?;
            } else if c.is_ascii_digit() {
                self.parse_number(&chars[self.index..])?;
            } else {
                self.parse_special(&chars[self.index..])?;
            }
        }
        Ok(())
    }

    /// Scans cleaned source into the full token sequence, or fails on the
    /// first character run it cannot classify.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
        let chars: Vec<char> = source.chars().collect();
        let mut lexer = Lexer::new();
        lexer.run(&chars)?;
        Ok(lexer.tokens)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
