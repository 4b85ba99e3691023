use std::fmt;

use tracing::debug;

use super::ScopeContext;

/// Slots 0-3 of every activation record hold the return value, static
/// link, dynamic link, and return address; variables start at 4.
pub const RESERVED_FRAME_SLOTS: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolKind {
    Const,
    Var,
    Proc,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolKind::Const => "const",
            SymbolKind::Var => "var",
            SymbolKind::Proc => "proc",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// A constant's numeric value or a variable's frame offset; 0 for
    /// procedures.
    pub val: i32,
    /// Lexical level the declaration appeared at.
    pub level: usize,
    /// Procedure whose block directly contains the declaration; empty at
    /// level 0.
    pub owner: String,
}

impl Symbol {
    /// Constants live at level 0 whatever block declares them.
    pub fn constant(name: &str, val: i32) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Const,
            val,
            level: 0,
            owner: String::new(),
        }
    }

    pub fn variable(name: &str, offset: i32, scope: &ScopeContext) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Var,
            val: offset,
            level: scope.level(),
            owner: scope.current_owner().to_string(),
        }
    }

    pub fn procedure(name: &str, scope: &ScopeContext) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Proc,
            val: 0,
            level: scope.level(),
            owner: scope.current_owner().to_string(),
        }
    }
}

/// Append-only store of every declaration seen during one run.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `symbol` unless a declaration with the same name is already
    /// visible from the current scope. A redeclaration is silently dropped
    /// and the first declaration kept.
    pub fn insert(&mut self, symbol: Symbol, scope: &ScopeContext) {
        if self.lookup(&symbol.name, scope).is_some() {
            debug!(name = %symbol.name, "redeclaration dropped");
            return;
        }
        debug!(
            name = %symbol.name,
            kind = %symbol.kind,
            level = symbol.level,
            owner = %symbol.owner,
            "declare"
        );
        self.symbols.push(symbol);
    }

    /// Resolves `name` from the current scope. Candidates are scanned
    /// newest-first; one is visible when its level is open and the
    /// procedure recorded at that level is the one that declared it.
    pub fn lookup(&self, name: &str, scope: &ScopeContext) -> Option<&Symbol> {
        self.symbols.iter().rev().find(|s| {
            s.name == name && s.level <= scope.level() && s.owner == scope.owner_at(s.level)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outermost() -> ScopeContext {
        let mut scope = ScopeContext::new();
        scope.enter("").unwrap();
        scope
    }

    #[test]
    fn redeclaration_in_same_scope_keeps_the_first() {
        let scope = outermost();
        let mut table = SymbolTable::new();

        table.insert(Symbol::variable("x", 4, &scope), &scope);
        table.insert(Symbol::variable("x", 9, &scope), &scope);

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("x", &scope).unwrap().val, 4);
    }

    #[test]
    fn declaration_in_a_closed_procedure_is_not_visible() {
        let mut scope = outermost();
        let mut table = SymbolTable::new();

        scope.enter("p").unwrap();
        table.insert(Symbol::variable("x", 4, &scope), &scope);
        scope.leave();

        scope.enter("q").unwrap();
        assert!(table.lookup("x", &scope).is_none());
        scope.leave();
    }

    #[test]
    fn constants_resolve_from_any_depth() {
        let mut scope = outermost();
        let mut table = SymbolTable::new();

        table.insert(Symbol::constant("limit", 100), &scope);
        scope.enter("p").unwrap();
        scope.enter("q").unwrap();

        let symbol = table.lookup("limit", &scope).unwrap();
        assert_eq!(symbol.kind, SymbolKind::Const);
        assert_eq!(symbol.val, 100);
    }

    #[test]
    fn lookup_returns_the_newest_visible_declaration() {
        // Two same-named declarations can coexist when the second is
        // inserted while the first is out of scope; resolution then follows
        // insertion order, newest first, not nesting depth.
        let mut scope = outermost();
        let mut table = SymbolTable::new();

        scope.enter("p").unwrap();
        table.insert(Symbol::variable("x", 4, &scope), &scope);
        scope.leave();

        table.insert(Symbol::variable("x", 7, &scope), &scope);

        scope.enter("p").unwrap();
        let symbol = table.lookup("x", &scope).unwrap();
        assert_eq!(symbol.level, 0);
        assert_eq!(symbol.val, 7);
    }

    #[test]
    fn visible_outer_declaration_suppresses_inner_insert() {
        let mut scope = outermost();
        let mut table = SymbolTable::new();

        table.insert(Symbol::variable("x", 4, &scope), &scope);
        scope.enter("p").unwrap();
        table.insert(Symbol::variable("x", 4, &scope), &scope);

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("x", &scope).unwrap().level, 0);
    }
}
