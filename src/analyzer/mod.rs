mod scope;
mod symbol_table;

pub use scope::*;
pub use symbol_table::*;
