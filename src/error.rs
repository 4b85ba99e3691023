use thiserror::Error;

/// Scanner-side failures. The offending lexeme is kept in the message so
/// over-length or malformed input is shown in full.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LexicalError {
    #[error("Identifier \"{0}\" too long.")]
    IdentifierTooLong(String),
    #[error("Number \"{0}\" too long.")]
    NumberTooLong(String),
    #[error("Identifier \"{0}\" cannot start with numbers.")]
    IdentifierStartsWithDigit(String),
    #[error("Unknown symbol '{0}'.")]
    UnknownSymbol(String),
    #[error("'=' expected after ':'.")]
    EqualExpectedAfterColon,
    #[error("Unknown character '{0}'.")]
    UnknownCharacter(char),
    #[error("EOF reached before comment termination.")]
    UnterminatedComment,
}

/// Parser-side failures, one variant per numeric diagnostic code. Every
/// grammar site raises exactly one of these; the first one aborts the run.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("= must be followed by a number.")]
    NumberExpected,
    #[error("Identifier must be followed by =.")]
    EqualExpected,
    #[error("const, var, procedure must be followed by an identifier.")]
    IdentifierExpected,
    #[error("Incorrect symbol after procedure declaration.")]
    BadProcedureDeclaration,
    #[error("Incorrect symbol after statement part in block.")]
    EndExpected,
    #[error("Period expected.")]
    PeriodExpected,
    #[error("Semicolon missing.")]
    SemicolonMissing,
    #[error("Undeclared identifier.")]
    UndeclaredIdentifier,
    #[error("Assignment to constant or procedure is not allowed.")]
    AssignToNonVariable,
    #[error("call must be followed by an identifier.")]
    CallTargetExpected,
    #[error("Call of a constant or variable is meaningless.")]
    CallOfNonProcedure,
    #[error("then expected.")]
    ThenExpected,
    #[error("do expected.")]
    DoExpected,
    #[error("Assignment operator expected.")]
    BecomesExpected,
    #[error("Relational operator expected.")]
    RelationExpected,
    #[error("Right parenthesis missing.")]
    RightParenMissing,
    #[error("The preceding factor cannot begin with this symbol.")]
    BadFactor,
    #[error("Nesting level exceeds the maximum depth.")]
    NestingTooDeep,
}

impl ParseError {
    /// Fixed numeric code identifying the grammar site that rejected the
    /// token.
    pub fn code(&self) -> u8 {
        match self {
            ParseError::NumberExpected => 2,
            ParseError::EqualExpected => 3,
            ParseError::IdentifierExpected => 4,
            ParseError::BadProcedureDeclaration => 6,
            ParseError::EndExpected => 8,
            ParseError::PeriodExpected => 9,
            ParseError::SemicolonMissing => 10,
            ParseError::UndeclaredIdentifier => 11,
            ParseError::AssignToNonVariable => 12,
            ParseError::CallTargetExpected => 14,
            ParseError::CallOfNonProcedure => 15,
            ParseError::ThenExpected => 16,
            ParseError::DoExpected => 18,
            ParseError::BecomesExpected => 19,
            ParseError::RelationExpected => 20,
            ParseError::RightParenMissing => 22,
            ParseError::BadFactor => 23,
            ParseError::NestingTooDeep => 26,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
