use morph_text::{Frame, Morph, MorphOptions};
use pretty_assertions::assert_eq;
use serde::Deserialize;

/// One morph scenario: two texts and the expected frame at a few budgets.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleDocument {
    name: String,
    old: String,
    new: String,

    #[serde(default)]
    options: Options,

    frames: Vec<ExpectedFrame>,
}

/// Mirror of `MorphOptions` so the documents don't need the `serde` feature
/// of the library.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Options {
    adjacent_lines: bool,
    reconcile_unpaired_tokens: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ExpectedFrame {
    budget: usize,
    text: String,

    #[serde(default)]
    remaining: usize,
}

impl ExampleDocument {
    pub fn morph(&self) -> Morph<'_> {
        let mut options = MorphOptions::default();
        if self.options.adjacent_lines {
            options.line_pairing = morph_text::LinePairing::Adjacent;
        }
        if self.options.reconcile_unpaired_tokens {
            options.unpaired_tokens = morph_text::UnpairedTokens::Reconcile;
        }

        Morph::with_options(&self.old, &self.new, options)
    }

    pub fn assert_frames(&self) {
        let morph = self.morph();

        for expected in &self.frames {
            let Frame {
                text, remaining, ..
            } = morph.at(expected.budget);

            assert_eq!(
                text, expected.text,
                "{} at budget {}",
                self.name, expected.budget
            );
            assert_eq!(
                remaining, expected.remaining,
                "{}: remaining budget after spending {}",
                self.name, expected.budget
            );
        }
    }

    pub fn assert_converges(&self) {
        let last = self
            .morph()
            .frames(1)
            .last()
            .expect("a morph always yields a frame");

        assert!(last.is_complete(), "{} never completes", self.name);
        if self.options.reconcile_unpaired_tokens {
            assert_eq!(last.text, self.new, "{} ends elsewhere", self.name);
        }
    }

    pub fn name(&self) -> &str { &self.name }
}
