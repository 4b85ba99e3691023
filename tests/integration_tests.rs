use pl0c::analyzer::SymbolKind;
use pl0c::compile;
use pl0c::error::{CompileError, LexicalError, ParseError};
use pl0c::lexer::{strip_comments, Lexer};
use pl0c::parser::Parser;
use pl0c::tables;

#[test]
fn accepts_a_complete_program() {
    let source = "\
const max = 100;
var arg, ret;

procedure sqr;
var acc;
begin
  acc := arg * arg;
  ret := acc
end;

begin
  arg := 7;
  if arg < max then call sqr;
  write ret
end.";

    let symbols = compile(source).unwrap();
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["max", "arg", "ret", "sqr", "acc"]);

    let acc = symbols.iter().find(|s| s.name == "acc").unwrap();
    assert_eq!(acc.kind, SymbolKind::Var);
    assert_eq!(acc.level, 1);
    assert_eq!(acc.owner, "sqr");
    assert_eq!(acc.val, 4);

    let sqr = symbols.iter().find(|s| s.name == "sqr").unwrap();
    assert_eq!(sqr.kind, SymbolKind::Proc);
    assert_eq!(sqr.level, 0);
}

#[test]
fn accepts_the_minimal_assignment_program() {
    let symbols = compile("var x; begin x := 1 + 2 end.").unwrap();
    assert_eq!(symbols.len(), 1);

    let x = symbols.iter().next().unwrap();
    assert_eq!((x.name.as_str(), x.level, x.val), ("x", 0, 4));
}

#[test]
fn rejects_equal_used_for_assignment() {
    let err = compile("var x; begin x = 1 end.").unwrap_err();
    assert_eq!(err, CompileError::Parse(ParseError::BecomesExpected));
}

#[test]
fn strips_comments_before_scanning() {
    let source = "var x; /* the only variable */ begin x := 1 end.";
    assert!(compile(source).is_ok());

    assert_eq!(
        compile("var x; /* runs off the end").unwrap_err(),
        CompileError::Lexical(LexicalError::UnterminatedComment)
    );
}

#[test]
fn surfaces_the_full_overlength_identifier() {
    let err = compile("var abcdefghijkl; begin abcdefghijkl := 1 end.").unwrap_err();
    assert_eq!(
        err,
        CompileError::Lexical(LexicalError::IdentifierTooLong(
            "abcdefghijkl".to_string()
        ))
    );
    assert_eq!(
        err.to_string(),
        "Identifier \"abcdefghijkl\" too long."
    );
}

#[test]
fn error_messages_are_fixed_text() {
    let err = compile("var x; begin y := 1 end.").unwrap_err();
    assert_eq!(err.to_string(), "Undeclared identifier.");
}

#[test]
fn persisted_token_path_matches_the_direct_path() {
    let source = "const lo = 1; var x; begin x := lo end.";

    let cleaned = strip_comments(source).unwrap();
    let tokens = Lexer::tokenize(&cleaned).unwrap();
    let reread = tables::read_lexeme_list(&tables::lexeme_list(&tokens)).unwrap();
    assert_eq!(reread, tokens);

    let direct = Parser::new(tokens).parse().unwrap();
    let persisted = Parser::new(reread).parse().unwrap();

    let persisted_dump: Vec<_> = persisted.iter().cloned().collect();
    let direct_dump: Vec<_> = direct.iter().cloned().collect();
    assert_eq!(persisted_dump, direct_dump);
}

#[test]
fn symbol_dump_renders_the_resolved_table() {
    let symbols = compile("var x; procedure p; ; begin x := 1 end.").unwrap();
    assert_eq!(
        tables::symbol_dump(&symbols),
        "name\tkind\tlevel\tvalue\n\
         x\tvar\t0\t4\n\
         p\tproc\t0\t\n"
    );
}
