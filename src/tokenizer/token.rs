#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token is a unit of comparison for the diff.
///
/// A token consists of the normalised form used for comparison, and the
/// original form that ends up in the morphed text.
///
/// It's UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Token<T>
where
    T: PartialEq + Clone + std::fmt::Debug,
{
    /// The normalised form of the token used for deriving the diff.
    normalised: T,

    /// The original string that is written to the output buffer.
    original: String,
}

/// Trivial implementation of Token when the normalised form is the same as the
/// original string.
impl From<&str> for Token<String> {
    fn from(text: &str) -> Self { Token::new(text.to_owned(), text.to_owned()) }
}

impl<T> Token<T>
where
    T: PartialEq + Clone + std::fmt::Debug,
{
    #[must_use]
    pub fn new(normalised: T, original: String) -> Self {
        Token {
            normalised,
            original,
        }
    }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

}

impl<T> PartialEq for Token<T>
where
    T: PartialEq + Clone + std::fmt::Debug,
{
    fn eq(&self, other: &Self) -> bool { self.normalised == other.normalised }
}
