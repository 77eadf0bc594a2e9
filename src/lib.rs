//! Budgeted morphing between two versions of a text.
//!
//! `morph` produces an intermediate text between `old` and `new` in which at
//! most a given number of character edits have been committed. Calling it
//! with a growing budget animates a gradual rewrite of one text into the
//! other instead of a jump cut.
//!
//! The texts are compared on three levels. Lines are diffed first and
//! removed lines are paired with added lines; paired lines are diffed word by
//! word and the words paired again; paired words are diffed character by
//! character. The characters of both versions are written side by side and
//! the budget then decides which of them survive.
//!
//! ```
//! use morph_text::{Budget, Morph, morph};
//!
//! // stale characters are struck out before new ones are revealed
//! let mut budget = Budget::new(2);
//! assert_eq!(morph("let x = 1;\n", "let y = 2;\n", &mut budget), "let  = ;\n");
//!
//! let mut budget = Budget::new(4);
//! assert_eq!(morph("let x = 1;\n", "let y = 2;\n", &mut budget), "let y = 2;\n");
//!
//! let frames: Vec<String> = Morph::new("cat", "cut").frames(1).map(|frame| frame.text).collect();
//! assert_eq!(frames, vec!["cat", "ct", "cut"]);
//! ```

mod diffs;
mod errors;
mod morph;
mod tokenizer;
mod utils;

pub use diffs::{change_record::ChangeRecord, diff_chars, diff_lines, diff_tokens, diff_with_tokenizer};
pub use errors::MorphError;
pub use morph::{
    Budget, Frame, Frames, LinePair, LinePairing, Morph, MorphOptions, UnpairedTokens, morph,
    morph_bytes, morph_with_options, pair_lines,
};
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer, character_tokenizer::character_tokenizer,
    line_tokenizer::line_tokenizer, token::Token, word_tokenizer::word_tokenizer,
};
pub use utils::side::Side;
