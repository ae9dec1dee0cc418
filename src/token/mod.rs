// Public exports.
pub use lexer::{LexError, LexErrorKind, Lexer};
pub use token::{Token, TokenInfo};

// Public mods.
pub mod token;

// Private mods.
mod lexer;
