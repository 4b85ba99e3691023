use std::fmt;

use phf::phf_map;

/// Identifiers longer than this are a lexical error.
pub const MAX_IDENT_LEN: usize = 11;
/// Number literals longer than this are a lexical error.
pub const MAX_NUM_LEN: usize = 5;

pub static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "const" => TokenKind::Const,
    "var" => TokenKind::Var,
    "procedure" => TokenKind::Procedure,
    "begin" => TokenKind::Begin,
    "end" => TokenKind::End,
    "if" => TokenKind::If,
    "then" => TokenKind::Then,
    "else" => TokenKind::Else,
    "while" => TokenKind::While,
    "do" => TokenKind::Do,
    "read" => TokenKind::Read,
    "odd" => TokenKind::Odd,
    "call" => TokenKind::Call,
    "write" => TokenKind::Write,
};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Num(i32),

    Plus,
    Minus,
    Star,
    Slash,

    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,

    LeftParen,
    RightParen,
    Comma,
    SemiColon,
    Period,
    Becomes,

    Const,
    Var,
    Procedure,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Call,
    Read,
    Write,
    Odd,

    /// End-of-stream sentinel; never produced by the scanner.
    Unknown,
}

impl TokenKind {
    /// Numeric code used by the lexeme table and lexeme list artifacts.
    /// Code 1 is reserved and never produced.
    pub fn code(&self) -> u8 {
        match self {
            TokenKind::Ident(_) => 2,
            TokenKind::Num(_) => 3,
            TokenKind::Plus => 4,
            TokenKind::Minus => 5,
            TokenKind::Star => 6,
            TokenKind::Slash => 7,
            TokenKind::Odd => 8,
            TokenKind::Equal => 9,
            TokenKind::NotEqual => 10,
            TokenKind::LessThan => 11,
            TokenKind::LessEqual => 12,
            TokenKind::GreaterThan => 13,
            TokenKind::GreaterEqual => 14,
            TokenKind::LeftParen => 15,
            TokenKind::RightParen => 16,
            TokenKind::Comma => 17,
            TokenKind::SemiColon => 18,
            TokenKind::Period => 19,
            TokenKind::Becomes => 20,
            TokenKind::Begin => 21,
            TokenKind::End => 22,
            TokenKind::If => 23,
            TokenKind::Then => 24,
            TokenKind::While => 25,
            TokenKind::Do => 26,
            TokenKind::Call => 27,
            TokenKind::Const => 28,
            TokenKind::Var => 29,
            TokenKind::Procedure => 30,
            TokenKind::Write => 31,
            TokenKind::Read => 32,
            TokenKind::Else => 33,
            TokenKind::Unknown => 34,
        }
    }

    /// Inverse of [`code`](Self::code) for the fixed kinds. Identifier and
    /// number codes need a lexeme and are handled by the lexeme-list reader.
    pub fn from_code(code: u8) -> Option<TokenKind> {
        Some(match code {
            4 => TokenKind::Plus,
            5 => TokenKind::Minus,
            6 => TokenKind::Star,
            7 => TokenKind::Slash,
            8 => TokenKind::Odd,
            9 => TokenKind::Equal,
            10 => TokenKind::NotEqual,
            11 => TokenKind::LessThan,
            12 => TokenKind::LessEqual,
            13 => TokenKind::GreaterThan,
            14 => TokenKind::GreaterEqual,
            15 => TokenKind::LeftParen,
            16 => TokenKind::RightParen,
            17 => TokenKind::Comma,
            18 => TokenKind::SemiColon,
            19 => TokenKind::Period,
            20 => TokenKind::Becomes,
            21 => TokenKind::Begin,
            22 => TokenKind::End,
            23 => TokenKind::If,
            24 => TokenKind::Then,
            25 => TokenKind::While,
            26 => TokenKind::Do,
            27 => TokenKind::Call,
            28 => TokenKind::Const,
            29 => TokenKind::Var,
            30 => TokenKind::Procedure,
            31 => TokenKind::Write,
            32 => TokenKind::Read,
            33 => TokenKind::Else,
            _ => return None,
        })
    }

    /// True for the six relational operators a condition accepts.
    pub fn is_relation(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessThan
                | TokenKind::LessEqual
                | TokenKind::GreaterThan
                | TokenKind::GreaterEqual
        )
    }
}

impl fmt::Display for TokenKind {
    /// The lexeme this kind was scanned from. The sentinel displays empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Ident(name) => return write!(f, "{name}"),
            TokenKind::Num(value) => return write!(f, "{value}"),
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "<>",
            TokenKind::LessThan => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::SemiColon => ";",
            TokenKind::Period => ".",
            TokenKind::Becomes => ":=",
            TokenKind::Const => "const",
            TokenKind::Var => "var",
            TokenKind::Procedure => "procedure",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Call => "call",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::Odd => "odd",
            TokenKind::Unknown => "",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_map_covers_all_reserved_words() {
        assert_eq!(KEYWORDS.len(), 14);
        assert_eq!(KEYWORDS.get("procedure"), Some(&TokenKind::Procedure));
        assert_eq!(KEYWORDS.get("odd"), Some(&TokenKind::Odd));
        assert!(KEYWORDS.get("x").is_none());
    }

    #[test]
    fn codes_round_trip_for_fixed_kinds() {
        for code in 4..=33 {
            let kind = TokenKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert!(TokenKind::from_code(1).is_none());
        assert!(TokenKind::from_code(2).is_none());
        assert!(TokenKind::from_code(3).is_none());
        assert!(TokenKind::from_code(34).is_none());
    }

    #[test]
    fn display_is_the_lexeme() {
        assert_eq!(TokenKind::Becomes.to_string(), ":=");
        assert_eq!(TokenKind::NotEqual.to_string(), "<>");
        assert_eq!(TokenKind::Ident("ratio".to_string()).to_string(), "ratio");
        assert_eq!(TokenKind::Num(42).to_string(), "42");
        assert_eq!(TokenKind::Unknown.to_string(), "");
    }
}
