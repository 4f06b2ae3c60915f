//! Text-level heuristics support for the formatter: a lightweight tokenizer
//! for lookahead over gaps between nodes, comment line-position
//! classification, whitespace helpers, and suppression pragma detection.

mod comments;
mod cursor;
mod suppression;
mod tokenizer;
mod whitespace;

pub use comments::*;
pub use cursor::*;
pub use suppression::*;
pub use tokenizer::*;
pub use whitespace::*;
