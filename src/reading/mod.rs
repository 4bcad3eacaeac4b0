pub mod ovp;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use ovp::{resolve_pivot, resolve_pivot_with, PivotBands, PivotResult};
pub use timing::chunk_interval;
pub use token::{Token, TokenStream};
pub use tokenizer::{collapse_whitespace, tokenize_text};
