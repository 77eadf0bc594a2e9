use super::morph_buffer::{Candidate, MorphBuffer};
use crate::{ChangeRecord, diff_chars};

/// Append the character-level superposition of `old` and `new` to the buffer.
///
/// Kept characters are written as they are; characters only present in `old`
/// are written and tracked as removal candidates, characters only present in
/// `new` are written and tracked as insertion candidates.
pub fn reconcile_chars(old: &str, new: &str, buffer: &mut MorphBuffer) {
    for record in diff_chars(old, new) {
        match &record {
            ChangeRecord::Kept(token) => buffer.push_str(token.original()),
            ChangeRecord::Removed(token) => {
                for char in token.original().chars() {
                    buffer.push_candidate(char, Candidate::Removal);
                }
            }
            ChangeRecord::Added(token) => {
                for char in token.original().chars() {
                    buffer.push_candidate(char, Candidate::Insertion);
                }
            }
        }
    }
}
