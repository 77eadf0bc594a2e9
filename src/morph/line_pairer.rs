use log::trace;

use super::{
    budget::Budget,
    budget_resolver::resolve_budget,
    morph_buffer::{Candidate, MorphBuffer},
    options::{LinePairing, MorphOptions},
    token_pairer::pair_tokens,
};
use crate::{ChangeRecord, tokenizer::line_tokenizer::split_line_terminator};

/// What the morph does with one line of the line-level diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinePair {
    /// A removed line that no added line claimed. It isn't part of the output.
    UnpairedRemoval(String),

    /// A removed line paired with an added line, morphed token by token.
    Modification { old: String, new: String },

    /// An added line without a removed counterpart, revealed by truncation.
    PureInsertion(String),

    /// A line present in both texts.
    Kept(String),
}

/// Classify the records of a line diff.
///
/// Removed lines are pushed onto a stack and every added line pops the most
/// recently pushed one, so within a change block the last removed line pairs
/// with the first added line. The output follows the order of the added and
/// kept lines; unpaired removals are reported where they are given up.
pub fn pair_lines(records: Vec<ChangeRecord<String>>, line_pairing: LinePairing) -> Vec<LinePair> {
    let mut result = Vec::with_capacity(records.len());
    let mut pending_removed: Vec<String> = Vec::new();

    for record in records {
        match record {
            ChangeRecord::Removed(token) => pending_removed.push(token.original().to_owned()),
            ChangeRecord::Added(token) => {
                let new = token.original().to_owned();
                result.push(match pending_removed.pop() {
                    Some(old) => LinePair::Modification { old, new },
                    None => LinePair::PureInsertion(new),
                });
            }
            ChangeRecord::Kept(token) => {
                if line_pairing == LinePairing::Adjacent {
                    result.extend(pending_removed.drain(..).map(LinePair::UnpairedRemoval));
                }
                result.push(LinePair::Kept(token.original().to_owned()));
            }
        }
    }

    result.extend(pending_removed.into_iter().map(LinePair::UnpairedRemoval));

    result
}

/// Write the outcome of one classified line into the buffer, spending from
/// the shared budget.
pub fn apply_line_pair(
    pair: &LinePair,
    options: &MorphOptions,
    budget: &mut Budget,
    buffer: &mut MorphBuffer,
) {
    match pair {
        LinePair::Kept(line) => buffer.push_str(line),
        LinePair::UnpairedRemoval(line) => trace!("Dropping unpaired removed line {line:?}"),
        LinePair::PureInsertion(line) => insert_truncated(line, budget, buffer),
        LinePair::Modification { old, new } => {
            let (old_content, _) = split_line_terminator(old);
            let (new_content, terminator) = split_line_terminator(new);

            pair_tokens(old_content, new_content, options.unpaired_tokens, buffer);
            trace!(
                "Resolving {} removal and {} insertion candidates of {new_content:?}",
                buffer.candidates(Candidate::Removal).len(),
                buffer.candidates(Candidate::Insertion).len()
            );
            resolve_budget(buffer, budget);

            buffer.push_str(terminator);
        }
    }
}

/// Copy as much of a brand new line as the budget allows. Without budget the
/// line is left out entirely; otherwise it is terminated like in the new text.
fn insert_truncated(line: &str, budget: &mut Budget, buffer: &mut MorphBuffer) {
    if budget.is_exhausted() {
        return;
    }

    let (content, terminator) = split_line_terminator(line);
    let granted = budget.spend_up_to(content.chars().count());

    buffer.push_str(&content.chars().take(granted).collect::<String>());
    buffer.push_str(terminator);
}
