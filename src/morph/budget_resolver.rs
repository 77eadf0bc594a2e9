use super::{
    budget::Budget,
    morph_buffer::{Candidate, MorphBuffer},
};

/// Commit or revert the pending edits of one merged line.
///
/// Stale characters are struck out first, most recently tracked first, as
/// long as the budget lasts. Then each insertion candidate, again most recent
/// first, is confirmed while budget remains and retracted once it has run
/// out. Removal candidates the budget couldn't reach stay in the text.
pub fn resolve_budget(buffer: &mut MorphBuffer, budget: &mut Budget) {
    while !budget.is_exhausted() {
        let Some(index) = buffer.pop_candidate(Candidate::Removal) else {
            break;
        };

        buffer.remove(index);
        let spent = budget.try_spend();
        debug_assert!(spent, "the loop guard leaves budget to spend");
    }

    while let Some(index) = buffer.pop_candidate(Candidate::Insertion) {
        if !budget.try_spend() {
            buffer.remove(index);
        }
    }

    buffer.clear_candidates();
}
