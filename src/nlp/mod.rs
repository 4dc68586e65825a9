//! Text normalization

pub mod tokenizer;

pub use tokenizer::tokenize;
