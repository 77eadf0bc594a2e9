use std::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::token::Token;

/// One unit of a diff: a token that was kept, removed from the old text or
/// added by the new text.
///
/// The order of a record sequence follows the merged alignment of the two
/// inputs, not either input alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeRecord<T>
where
    T: PartialEq + Clone + Debug,
{
    Kept(Token<T>),
    Removed(Token<T>),
    Added(Token<T>),
}

impl<T> ChangeRecord<T>
where
    T: PartialEq + Clone + Debug,
{
    /// The wrapped token, whichever side it comes from.
    #[must_use]
    pub fn token(&self) -> &Token<T> {
        match self {
            ChangeRecord::Kept(token) | ChangeRecord::Removed(token) | ChangeRecord::Added(token) => {
                token
            }
        }
    }

    /// The original text of the wrapped token.
    #[must_use]
    pub fn text(&self) -> &str { self.token().original() }
}

impl<T> Display for ChangeRecord<T>
where
    T: PartialEq + Clone + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = match self {
            ChangeRecord::Kept(_) => '=',
            ChangeRecord::Removed(_) => '-',
            ChangeRecord::Added(_) => '+',
        };

        write!(f, "{sign}{}", self.text())
    }
}
