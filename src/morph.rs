mod budget;
mod budget_resolver;
mod char_reconciler;
mod frames;
mod line_pairer;
mod morph_buffer;
mod options;
mod token_pairer;

pub use budget::Budget;
pub use frames::{Frame, Frames, Morph};
use line_pairer::apply_line_pair;
pub use line_pairer::{LinePair, pair_lines};
use log::debug;
use morph_buffer::MorphBuffer;
pub use options::{LinePairing, MorphOptions, UnpairedTokens};

use crate::{MorphError, Side, diff_lines, utils::string_or_nothing::string_or_nothing};

/// Morph `old` towards `new`, committing at most `budget` character edits.
///
/// The result is a partial transition: lines present in both texts are kept,
/// modified lines are rewritten character by character as far as the budget
/// allows, and new lines are revealed from the left. Whatever budget is left
/// stays in `budget`; leftover budget means the result is as close to `new`
/// as the morph gets.
///
/// ```
/// use morph_text::{Budget, morph};
///
/// let mut budget = Budget::new(1);
/// assert_eq!(morph("foo", "bar", &mut budget), "fo");
/// assert_eq!(budget.remaining(), 0);
///
/// let mut budget = Budget::new(10);
/// assert_eq!(morph("foo", "bar", &mut budget), "bar");
/// assert_eq!(budget.remaining(), 4);
/// ```
pub fn morph(old: &str, new: &str, budget: &mut Budget) -> String {
    morph_with_options(old, new, budget, &MorphOptions::default())
}

/// Same as `morph` with explicit pairing policies.
pub fn morph_with_options(
    old: &str,
    new: &str,
    budget: &mut Budget,
    options: &MorphOptions,
) -> String {
    let initial_budget = budget.remaining();
    let mut buffer = MorphBuffer::with_capacity(old.len().max(new.len()));

    let pairs = pair_lines(diff_lines(old, new), options.line_pairing);
    for pair in &pairs {
        apply_line_pair(pair, options, budget, &mut buffer);
    }

    debug!(
        "Morphed {} line pairs, spent {} of {initial_budget} budget",
        pairs.len(),
        initial_budget - budget.remaining()
    );

    buffer.to_string()
}

/// Morph between two raw file contents.
///
/// # Errors
///
/// Returns `MorphError::BinaryInput` if either side contains a NUL byte or
/// isn't valid UTF-8.
pub fn morph_bytes(
    old: &[u8],
    new: &[u8],
    budget: &mut Budget,
    options: &MorphOptions,
) -> Result<String, MorphError> {
    let old = string_or_nothing(old).ok_or(MorphError::BinaryInput { side: Side::Old })?;
    let new = string_or_nothing(new).ok_or(MorphError::BinaryInput { side: Side::New })?;

    Ok(morph_with_options(old, new, budget, options))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::{test_case, test_matrix};

    use super::*;

    const OLD_CODE: &str = "fn main() {\n    let x = 1;\n    setup();\n    run(x);\n}\n";
    const NEW_CODE: &str = "fn main() {\n    let y = 22;\n    setup();\n    run(y);\n}\n";

    fn reconcile_options() -> MorphOptions {
        MorphOptions {
            unpaired_tokens: UnpairedTokens::Reconcile,
            ..MorphOptions::default()
        }
    }

    fn run(old: &str, new: &str, amount: usize) -> (String, Budget) {
        let mut budget = Budget::new(amount);
        let text = morph(old, new, &mut budget);
        (text, budget)
    }

    #[test_matrix(
        ["", "single", "two\nlines\n", OLD_CODE, "tab\tand\r\nwindows lines"],
        [0, 1, 1000]
    )]
    fn test_identity(text: &str, amount: usize) {
        let (result, budget) = run(text, text, amount);

        assert_eq!(result, text);
        assert_eq!(budget.spent(), 0);
    }

    #[test_case("foo", "bar", 0, "foo")]
    #[test_case("foo", "bar", 1, "fo")]
    #[test_case("foo", "bar", 3, "")]
    #[test_case("foo", "bar", 6, "bar")]
    #[test_case("fn a() {\n    foo\n}\n", "fn a() {\n    bar\n}\n", 1, "fn a() {\n    fo\n}\n")]
    #[test_case("fn a() {\n    foo\n}\n", "fn a() {\n    bar\n}\n", 4, "fn a() {\n    r\n}\n")]
    fn test_pinned_scenarios(old: &str, new: &str, amount: usize, expected: &str) {
        assert_eq!(run(old, new, amount).0, expected);
    }

    #[test_case("foo", "bar"; "single token")]
    #[test_case("aa bb", "cc dd"; "tokens separated by kept whitespace")]
    #[test_case("one\nfoo\nthree\n", "one\nbar\nthree\n"; "inside kept lines")]
    fn test_zero_budget_keeps_old_line(old: &str, new: &str) {
        let (result, budget) = run(old, new, 0);

        assert_eq!(result, old);
        assert_eq!(budget.spent(), 0);
    }

    #[test_case(3, "hel", 0)]
    #[test_case(5, "hello", 0)]
    #[test_case(8, "hello", 3)]
    fn test_pure_insertion_is_truncated(amount: usize, expected: &str, remaining: usize) {
        let (result, budget) = run("", "hello", amount);

        assert_eq!(result, expected);
        assert_eq!(budget.remaining(), remaining);
    }

    #[test]
    fn test_earlier_lines_spend_first() {
        let (result, budget) = run("", "abc\ndef\n", 4);

        assert_eq!(result, "abc\nd\n");
        assert!(budget.is_exhausted());
    }

    #[test]
    fn test_removed_lines_disappear_for_free() {
        let (result, budget) = run("keep\ngone\n", "keep\n", 0);

        assert_eq!(result, "keep\n");
        assert_eq!(budget.spent(), 0);
    }

    #[test_matrix([0, 1, 2, 5, 8, 13, 100])]
    fn test_budget_is_conserved(amount: usize) {
        let (_, budget) = run(OLD_CODE, NEW_CODE, amount);

        assert_eq!(budget.spent() + budget.remaining(), amount);
        assert!(budget.spent() <= amount);
    }

    #[test]
    fn test_budget_is_not_reset_between_calls() {
        let mut budget = Budget::new(4);
        let _ = morph("foo", "bar", &mut budget);
        let second = morph("foo", "bar", &mut budget);

        assert_eq!(second, "foo");
        assert_eq!(budget.spent(), 4);
    }

    #[test]
    fn test_default_options_converge_when_tokens_pair_up() {
        let last = Morph::new(OLD_CODE, NEW_CODE).frames(1).last().unwrap();
        assert_eq!(last.text, NEW_CODE);
    }

    #[test_case("", "brand new text\n")]
    #[test_case("some old text\n", "")]
    #[test_case("a b c\n", "a\n")]
    #[test_case("x\n", "x y z\n")]
    #[test_case(OLD_CODE, "fn main() {\n    println!(\"hi\", 1 + 2);\n    return;\n}")]
    #[test_case("first\nsecond\nthird", "third\nsecond\nfirst\nfourth\n")]
    fn test_reconcile_options_converge(old: &str, new: &str) {
        let last = Morph::with_options(old, new, reconcile_options())
            .frames(1)
            .last()
            .unwrap();

        assert_eq!(last.text, new);

        let mut budget = Budget::new(last.budget + 10);
        assert_eq!(morph_with_options(old, new, &mut budget, &reconcile_options()), new);
    }

    #[test]
    fn test_adjacent_pairing_inserts_instead_of_rewriting() {
        let options = MorphOptions {
            line_pairing: LinePairing::Adjacent,
            ..MorphOptions::default()
        };
        let mut budget = Budget::new(1);

        assert_eq!(
            morph_with_options("x\nk\n", "k\ny\n", &mut budget, &options),
            "k\ny\n"
        );
        assert!(budget.is_exhausted());
    }

    #[test]
    fn test_stack_pairing_rewrites_across_kept_lines() {
        let mut budget = Budget::new(0);

        assert_eq!(morph("x\nk\n", "k\ny\n", &mut budget), "k\nx\n");
    }

    #[test]
    fn test_morph_bytes() {
        let mut budget = Budget::new(10);
        assert_eq!(
            morph_bytes(b"foo", b"bar", &mut budget, &MorphOptions::default()),
            Ok("bar".to_owned())
        );

        assert_eq!(
            morph_bytes(&[0, 1, 2], b"bar", &mut budget, &MorphOptions::default()),
            Err(MorphError::BinaryInput { side: Side::Old })
        );
        assert_eq!(
            morph_bytes(b"foo", &[0xff, 0xfe], &mut budget, &MorphOptions::default()),
            Err(MorphError::BinaryInput { side: Side::New })
        );
    }
}
