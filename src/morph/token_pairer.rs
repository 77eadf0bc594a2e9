use std::collections::VecDeque;

use log::trace;

use super::{char_reconciler::reconcile_chars, morph_buffer::MorphBuffer, options::UnpairedTokens};
use crate::{ChangeRecord, diff_tokens};

/// Write the merged form of a modified line into the buffer.
///
/// `old_line` and `new_line` are line contents without their terminators.
/// Removed tokens wait in a FIFO queue and each added token is paired with
/// the oldest waiting one; the pair is then reconciled character by
/// character. Kept tokens are copied without being tracked.
pub fn pair_tokens(
    old_line: &str,
    new_line: &str,
    unpaired_tokens: UnpairedTokens,
    buffer: &mut MorphBuffer,
) {
    let mut pending_removed: VecDeque<String> = VecDeque::new();

    for (i, record) in diff_tokens(old_line, new_line).into_iter().enumerate() {
        match record {
            ChangeRecord::Removed(token) => pending_removed.push_back(token.original().to_owned()),
            ChangeRecord::Added(token) => match pending_removed.pop_front() {
                Some(removed) => reconcile_chars(&removed, token.original(), buffer),
                None => match unpaired_tokens {
                    UnpairedTokens::Separator => {
                        if i > 0 && !is_whitespace(token.original()) {
                            trace!("Replacing unpaired token {:?} with a separator", token.original());
                            buffer.push_str(" ");
                        }
                    }
                    UnpairedTokens::Reconcile => reconcile_chars("", token.original(), buffer),
                },
            },
            ChangeRecord::Kept(token) => {
                if unpaired_tokens == UnpairedTokens::Reconcile {
                    flush_removed(&mut pending_removed, buffer);
                }
                buffer.push_str(token.original());
            }
        }
    }

    match unpaired_tokens {
        UnpairedTokens::Separator if !pending_removed.is_empty() => {
            trace!("Dropping {} unpaired removed tokens", pending_removed.len());
        }
        UnpairedTokens::Separator => {}
        UnpairedTokens::Reconcile => flush_removed(&mut pending_removed, buffer),
    }
}

/// Whitespace runs are tokens of their own; an unpaired word already gets one
/// separator, so its leading whitespace gets none.
fn is_whitespace(token: &str) -> bool { token.chars().all(char::is_whitespace) }

fn flush_removed(pending_removed: &mut VecDeque<String>, buffer: &mut MorphBuffer) {
    for removed in pending_removed.drain(..) {
        reconcile_chars(&removed, "", buffer);
    }
}
