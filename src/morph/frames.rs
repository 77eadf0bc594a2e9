#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{budget::Budget, morph_with_options, options::MorphOptions};
use crate::{MorphError, Side, utils::string_or_nothing::string_or_nothing};

/// A pair of texts to morph between, evaluated at any budget.
///
/// Every evaluation starts from scratch; nothing is cached between budgets.
///
/// ```
/// use morph_text::Morph;
///
/// let texts: Vec<String> = Morph::new("cat", "cut").frames(1).map(|frame| frame.text).collect();
/// assert_eq!(texts, vec!["cat", "ct", "cut"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Morph<'a> {
    old: &'a str,
    new: &'a str,
    options: MorphOptions,
}

/// The state of a morph at a given budget.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub budget: usize,
    pub remaining: usize,
    complete: bool,
}

impl Frame {
    /// The frame shows the new text, or no edit was skipped for lack of
    /// budget. Larger budgets won't change anything.
    #[must_use]
    pub fn is_complete(&self) -> bool { self.complete }
}

impl<'a> Morph<'a> {
    #[must_use]
    pub fn new(old: &'a str, new: &'a str) -> Self {
        Self::with_options(old, new, MorphOptions::default())
    }

    #[must_use]
    pub fn with_options(old: &'a str, new: &'a str, options: MorphOptions) -> Self {
        Self { old, new, options }
    }

    /// Create a morph between two raw file contents.
    ///
    /// # Errors
    ///
    /// Returns `MorphError::BinaryInput` if either side contains a NUL byte
    /// or isn't valid UTF-8.
    pub fn from_bytes(old: &'a [u8], new: &'a [u8], options: MorphOptions) -> Result<Self, MorphError> {
        let old = string_or_nothing(old).ok_or(MorphError::BinaryInput { side: Side::Old })?;
        let new = string_or_nothing(new).ok_or(MorphError::BinaryInput { side: Side::New })?;

        Ok(Self::with_options(old, new, options))
    }

    /// Morph with a fresh budget of `budget` edits.
    #[must_use]
    pub fn at(&self, budget: usize) -> Frame {
        let mut remaining = Budget::new(budget);
        let text = morph_with_options(self.old, self.new, &mut remaining, &self.options);
        let complete = !remaining.is_exhausted() || text == self.new;

        Frame {
            text,
            budget,
            remaining: remaining.remaining(),
            complete,
        }
    }

    /// Iterate over frames with budgets `0, step, 2 * step, ...`, ending with
    /// the first complete frame. A `step` of zero is treated as one.
    #[must_use]
    pub fn frames(&self, step: usize) -> Frames<'a> {
        Frames {
            morph: *self,
            step: step.max(1),
            next_budget: Some(0),
        }
    }
}

/// Iterator returned by `Morph::frames`.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    morph: Morph<'a>,
    step: usize,
    next_budget: Option<usize>,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let budget = self.next_budget?;
        let frame = self.morph.at(budget);

        self.next_budget = if frame.is_complete() {
            None
        } else {
            budget.checked_add(self.step)
        };

        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::UnpairedTokens;

    fn texts(frames: Frames<'_>) -> Vec<String> { frames.map(|frame| frame.text).collect() }

    #[test]
    fn test_frames_until_complete() {
        assert_eq!(
            texts(Morph::new("foo", "bar").frames(1)),
            vec!["foo", "fo", "f", "", "r", "ar", "bar"]
        );
    }

    #[test]
    fn test_frames_with_step() {
        assert_eq!(
            texts(Morph::new("foo", "bar").frames(2)),
            vec!["foo", "f", "r", "bar"]
        );
    }

    #[test]
    fn test_identical_texts_have_a_single_frame() {
        let frames: Vec<Frame> = Morph::new("same\n", "same\n").frames(3).collect();

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "same\n");
        assert!(frames[0].is_complete());
    }

    #[test]
    fn test_frames_end_when_budget_is_left_over() {
        // the unpaired token never appears, so completion is detected through
        // the unused budget
        let last = Morph::new("a", "a b").frames(1).last().unwrap();

        assert_eq!(last.text, "a ");
        assert_eq!(last.budget, 1);
        assert_eq!(last.remaining, 1);
    }

    #[test]
    fn test_reconcile_frames_reach_new_text() {
        let options = MorphOptions {
            unpaired_tokens: UnpairedTokens::Reconcile,
            ..MorphOptions::default()
        };
        let last = Morph::with_options("a", "a b", options).frames(1).last().unwrap();

        assert_eq!(last.text, "a b");
        assert_eq!(last.budget, 2);
    }

    #[test]
    fn test_from_bytes() {
        let morph = Morph::from_bytes(b"foo", b"bar", MorphOptions::default()).unwrap();
        assert_eq!(morph.at(1).text, "fo");

        assert_eq!(
            Morph::from_bytes(b"foo", b"b\0r", MorphOptions::default()).unwrap_err(),
            MorphError::BinaryInput { side: Side::New }
        );
    }

    #[test]
    fn test_at() {
        let frame = Morph::new("foo", "bar").at(10);

        assert_eq!(frame.text, "bar");
        assert_eq!(frame.remaining, 4);
        assert!(frame.is_complete());
    }
}
