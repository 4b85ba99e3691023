mod cursor;
mod parser;

pub use cursor::*;
pub use parser::*;
