use std::ops::Deref;

use token::Token;

pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A trait for tokenizers that take a string and return a list of tokens.
pub type Tokenizer<T> = dyn Fn(&str) -> Vec<Token<T>>;

/// The tokenizers used at each level of the morph.
///
/// ```
/// use morph_text::BuiltinTokenizer;
///
/// let tokenizer = BuiltinTokenizer::Word;
/// assert_eq!(tokenizer("Hi there!").len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTokenizer {
    /// Lines including their terminators, see `line_tokenizer`.
    Line,

    /// Alternating runs of whitespace and non-whitespace, see `word_tokenizer`.
    Word,

    /// Single UTF-8 characters, see `character_tokenizer`.
    Character,
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer<String>;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Line => &line_tokenizer::line_tokenizer,
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Character => &character_tokenizer::character_tokenizer,
        }
    }
}
