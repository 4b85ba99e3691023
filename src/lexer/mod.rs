mod clean;
mod lexer;
mod token;

pub use clean::*;
pub use lexer::*;
pub use token::*;
