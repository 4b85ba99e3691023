use tracing::debug;

use crate::analyzer::{ScopeContext, Symbol, SymbolKind, SymbolTable, RESERVED_FRAME_SLOTS};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

use super::TokenCursor;

/// Recursive-descent parser: one method per nonterminal, all pulling
/// tokens through a single cursor and recording declarations as a side
/// effect of the productions that introduce them. The first mismatch
/// aborts the whole parse.
#[derive(Debug)]
pub struct Parser {
    cursor: TokenCursor,
    scope: ScopeContext,
    symbols: SymbolTable,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            scope: ScopeContext::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Runs the parse to completion, yielding the resolved symbol table.
    pub fn parse(mut self) -> Result<SymbolTable, ParseError> {
        self.parse_program()?;
        Ok(self.symbols)
    }

    fn kind(&self) -> &TokenKind {
        &self.cursor.current().kind
    }

    fn fail<T>(&self, err: ParseError) -> Result<T, ParseError> {
        debug!(
            code = err.code(),
            index = self.cursor.index(),
            token = %self.kind(),
            "parse rejected"
        );
        Err(err)
    }

    /// program = block "."
    fn parse_program(&mut self) -> Result<(), ParseError> {
        self.parse_block("")?;
        if *self.kind() != TokenKind::Period {
            return self.fail(ParseError::PeriodExpected);
        }
        Ok(())
    }

    /// block = [ "const" const-decls ] [ "var" var-decls ]
    ///         { procedure } statement
    fn parse_block(&mut self, owner: &str) -> Result<(), ParseError> {
        self.scope.enter(owner)?;
        debug!(level = self.scope.level(), owner, "entering block");

        if *self.kind() == TokenKind::Const {
            self.parse_const_decls()?;
        }
        if *self.kind() == TokenKind::Var {
            let count = self.parse_var_decls()?;
            debug!(slots = RESERVED_FRAME_SLOTS + count, "activation frame sized");
        }
        while *self.kind() == TokenKind::Procedure {
            self.parse_procedure()?;
        }
        self.parse_statement()?;

        debug!(level = self.scope.level(), owner, "leaving block");
        self.scope.leave();
        Ok(())
    }

    /// const-decls = ident "=" number { "," ident "=" number } ";"
    fn parse_const_decls(&mut self) -> Result<(), ParseError> {
        loop {
            self.cursor.advance();
            let TokenKind::Ident(name) = self.kind().clone() else {
                return self.fail(ParseError::IdentifierExpected);
            };
            self.cursor.advance();
            if *self.kind() != TokenKind::Equal {
                return self.fail(ParseError::EqualExpected);
            }
            self.cursor.advance();
            let &TokenKind::Num(value) = self.kind() else {
                return self.fail(ParseError::NumberExpected);
            };
            self.symbols.insert(Symbol::constant(&name, value), &self.scope);
            self.cursor.advance();
            if *self.kind() != TokenKind::Comma {
                break;
            }
        }
        if *self.kind() != TokenKind::SemiColon {
            return self.fail(ParseError::SemicolonMissing);
        }
        self.cursor.advance();
        Ok(())
    }

    /// var-decls = ident { "," ident } ";"
    ///
    /// Returns the number of variables declared, for frame sizing.
    fn parse_var_decls(&mut self) -> Result<i32, ParseError> {
        let mut count = 0;
        loop {
            self.cursor.advance();
            let TokenKind::Ident(name) = self.kind().clone() else {
                return self.fail(ParseError::IdentifierExpected);
            };
            let offset = RESERVED_FRAME_SLOTS + count;
            self.symbols
                .insert(Symbol::variable(&name, offset, &self.scope), &self.scope);
            count += 1;
            self.cursor.advance();
            if *self.kind() != TokenKind::Comma {
                break;
            }
        }
        if *self.kind() != TokenKind::SemiColon {
            return self.fail(ParseError::SemicolonMissing);
        }
        self.cursor.advance();
        Ok(count)
    }

    /// procedure = "procedure" ident ";" block ";"
    fn parse_procedure(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let TokenKind::Ident(name) = self.kind().clone() else {
            return self.fail(ParseError::IdentifierExpected);
        };
        // Declared before its body is parsed so recursive calls resolve.
        self.symbols
            .insert(Symbol::procedure(&name, &self.scope), &self.scope);
        self.cursor.advance();
        if *self.kind() != TokenKind::SemiColon {
            return self.fail(ParseError::BadProcedureDeclaration);
        }
        self.cursor.advance();
        self.parse_block(&name)?;
        if *self.kind() != TokenKind::SemiColon {
            return self.fail(ParseError::SemicolonMissing);
        }
        self.cursor.advance();
        Ok(())
    }

    /// statement = [ ident ":=" expression
    ///             | "call" ident
    ///             | "begin" statement { ";" statement } "end"
    ///             | "if" condition "then" statement [ "else" statement ]
    ///             | "while" condition "do" statement
    ///             | ( "read" | "write" ) ident ]
    fn parse_statement(&mut self) -> Result<(), ParseError> {
        debug!(token = %self.kind(), "statement");
        match self.kind().clone() {
            TokenKind::Ident(name) => {
                let kind = match self.symbols.lookup(&name, &self.scope) {
                    Some(symbol) => symbol.kind,
                    None => return self.fail(ParseError::UndeclaredIdentifier),
                };
                if kind != SymbolKind::Var {
                    return self.fail(ParseError::AssignToNonVariable);
                }
                self.cursor.advance();
                if *self.kind() != TokenKind::Becomes {
                    return self.fail(ParseError::BecomesExpected);
                }
                self.cursor.advance();
                self.parse_expression()
            }
            TokenKind::Call => {
                self.cursor.advance();
                let TokenKind::Ident(name) = self.kind().clone() else {
                    return self.fail(ParseError::CallTargetExpected);
                };
                let kind = match self.symbols.lookup(&name, &self.scope) {
                    Some(symbol) => symbol.kind,
                    None => return self.fail(ParseError::UndeclaredIdentifier),
                };
                if kind != SymbolKind::Proc {
                    return self.fail(ParseError::CallOfNonProcedure);
                }
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Begin => {
                self.cursor.advance();
                self.parse_statement()?;
                while *self.kind() == TokenKind::SemiColon {
                    self.cursor.advance();
                    self.parse_statement()?;
                }
                if *self.kind() != TokenKind::End {
                    return self.fail(ParseError::EndExpected);
                }
                self.cursor.advance();
                Ok(())
            }
            TokenKind::If => {
                self.cursor.advance();
                self.parse_condition()?;
                if *self.kind() != TokenKind::Then {
                    return self.fail(ParseError::ThenExpected);
                }
                self.cursor.advance();
                self.parse_statement()?;
                if *self.kind() == TokenKind::Else {
                    self.cursor.advance();
                    self.parse_statement()?;
                }
                Ok(())
            }
            TokenKind::While => {
                self.cursor.advance();
                self.parse_condition()?;
                if *self.kind() != TokenKind::Do {
                    return self.fail(ParseError::DoExpected);
                }
                self.cursor.advance();
                self.parse_statement()
            }
            TokenKind::Read | TokenKind::Write => {
                self.cursor.advance();
                let resolved = match self.kind() {
                    TokenKind::Ident(name) => self.symbols.lookup(name, &self.scope).is_some(),
                    _ => false,
                };
                if !resolved {
                    return self.fail(ParseError::UndeclaredIdentifier);
                }
                self.cursor.advance();
                Ok(())
            }
            // The statement production is optional; leave the token for
            // the enclosing production to judge.
            _ => Ok(()),
        }
    }

    /// condition = "odd" expression | expression rel-op expression
    fn parse_condition(&mut self) -> Result<(), ParseError> {
        if *self.kind() == TokenKind::Odd {
            self.cursor.advance();
            return self.parse_expression();
        }
        self.parse_expression()?;
        if !self.kind().is_relation() {
            return self.fail(ParseError::RelationExpected);
        }
        self.cursor.advance();
        self.parse_expression()
    }

    /// expression = term { ("+" | "-") term }
    fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.parse_term()?;
        while matches!(self.kind(), TokenKind::Plus | TokenKind::Minus) {
            self.cursor.advance();
            self.parse_term()?;
        }
        Ok(())
    }

    /// term = factor { ("*" | "/") factor }
    fn parse_term(&mut self) -> Result<(), ParseError> {
        self.parse_factor()?;
        while matches!(self.kind(), TokenKind::Star | TokenKind::Slash) {
            self.cursor.advance();
            self.parse_factor()?;
        }
        Ok(())
    }

    /// factor = ident | number | "(" expression ")"
    fn parse_factor(&mut self) -> Result<(), ParseError> {
        match self.kind().clone() {
            TokenKind::Ident(name) => {
                if self.symbols.lookup(&name, &self.scope).is_none() {
                    return self.fail(ParseError::UndeclaredIdentifier);
                }
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Num(_) => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                self.parse_expression()?;
                if *self.kind() != TokenKind::RightParen {
                    return self.fail(ParseError::RightParenMissing);
                }
                self.cursor.advance();
                Ok(())
            }
            _ => self.fail(ParseError::BadFactor),
        }
    }
}
