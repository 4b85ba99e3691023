use crate::error::ParseError;

/// Deepest procedure nesting the front end accepts.
pub const MAX_LEXICAL_LEVEL: usize = 3;

/// Records which procedure's block is open at each lexical level. The
/// outermost block is level 0 and belongs to no procedure (empty name).
#[derive(Debug, Default)]
pub struct ScopeContext {
    owners: Vec<String>,
}

impl ScopeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a block owned by `owner` one level below the current one.
    /// Fails past [`MAX_LEXICAL_LEVEL`].
    pub fn enter(&mut self, owner: &str) -> Result<(), ParseError> {
        if self.owners.len() > MAX_LEXICAL_LEVEL {
            return Err(ParseError::NestingTooDeep);
        }
        self.owners.push(owner.to_string());
        Ok(())
    }

    pub fn leave(&mut self) {
        self.owners.pop();
    }

    /// Current lexical level. Only meaningful while a block is open.
    pub fn level(&self) -> usize {
        self.owners.len() - 1
    }

    /// Name of the procedure whose block is open at `level`.
    pub fn owner_at(&self, level: usize) -> &str {
        &self.owners[level]
    }

    pub fn current_owner(&self) -> &str {
        self.owner_at(self.level())
    }
}
