use std::fmt::Debug;

use change_record::ChangeRecord;

use crate::tokenizer::{BuiltinTokenizer, Tokenizer};

pub mod change_record;
mod myers;

/// Diff two strings after splitting them with `tokenizer`.
///
/// Kept and removed records concatenate to `old`, kept and added records
/// concatenate to `new`.
pub fn diff_with_tokenizer<T>(old: &str, new: &str, tokenizer: &Tokenizer<T>) -> Vec<ChangeRecord<T>>
where
    T: PartialEq + Clone + Debug,
{
    myers::diff(&(tokenizer)(old), &(tokenizer)(new))
}

/// Diff two texts line by line. Lines keep their terminators.
///
/// ```
/// use morph_text::{ChangeRecord, diff_lines};
///
/// let records = diff_lines("a\nb\n", "a\nc\n");
/// assert!(matches!(records[0], ChangeRecord::Kept(_)));
/// assert_eq!(records[0].text(), "a\n");
/// ```
#[must_use]
pub fn diff_lines(old: &str, new: &str) -> Vec<ChangeRecord<String>> {
    diff_with_tokenizer(old, new, &*BuiltinTokenizer::Line)
}

/// Diff two lines word by word. Whitespace runs are tokens of their own.
#[must_use]
pub fn diff_tokens(old: &str, new: &str) -> Vec<ChangeRecord<String>> {
    diff_with_tokenizer(old, new, &*BuiltinTokenizer::Word)
}

/// Diff two strings character by character.
#[must_use]
pub fn diff_chars(old: &str, new: &str) -> Vec<ChangeRecord<String>> {
    diff_with_tokenizer(old, new, &*BuiltinTokenizer::Character)
}
