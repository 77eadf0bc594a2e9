#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs of the pairing policies of a morph. The defaults reproduce the
/// classic behaviour: stack-based line pairing and separator placeholders for
/// unpaired tokens.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MorphOptions {
    pub line_pairing: LinePairing,
    pub unpaired_tokens: UnpairedTokens,
}

/// How removed lines are paired with added lines.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePairing {
    /// An added line is paired with the most recently removed line that is
    /// still unpaired, even if kept lines separate the two.
    #[default]
    Stack,

    /// Like `Stack`, but a kept line discards every pending removed line, so
    /// only lines of the same change block can pair.
    Adjacent,
}

/// What happens to tokens of a modified line that have no counterpart.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnpairedTokens {
    /// An added word without a removed counterpart is replaced by a single
    /// space, and its unpaired leading whitespace is left out. Removed tokens
    /// without an added counterpart are dropped.
    /// Cheap, but such lines never fully reach the new text.
    #[default]
    Separator,

    /// Unpaired tokens are morphed against the empty string, so every one of
    /// their characters is revealed or struck out through the budget.
    Reconcile,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_partial_yaml() {
        let options: MorphOptions = serde_yaml::from_str("line_pairing: adjacent").unwrap();

        assert_eq!(
            options,
            MorphOptions {
                line_pairing: LinePairing::Adjacent,
                unpaired_tokens: UnpairedTokens::Separator,
            }
        );
    }

    #[test]
    fn test_deserialize_empty_yaml() {
        let options: MorphOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(options, MorphOptions::default());
    }
}
