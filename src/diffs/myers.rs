//! Myers' diff algorithm, based on the implementation in
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! # Heuristics
//!
//! No heuristics are implemented for pathological inputs: two large and
//! completely distinct sequences make the search explore every diagonal.
//! Inputs of the morph are single lines or single tokens at the two lower
//! levels, so only the line level can get large.

use std::{
    fmt::Debug,
    ops::{Index, IndexMut, Range},
};

use super::change_record::ChangeRecord;
use crate::{
    tokenizer::token::Token,
    utils::common_affix_len::{common_prefix_len, common_suffix_len},
};

/// Diff `old` and `new` and return one `ChangeRecord` per token, in the
/// order of the merged alignment.
///
/// Within each run of changes between two kept tokens, removals precede
/// additions.
pub fn diff<T>(old: &[Token<T>], new: &[Token<T>]) -> Vec<ChangeRecord<T>>
where
    T: PartialEq + Clone + Debug,
{
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::with_capacity(old.len().max(new.len()));

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    removals_before_additions(result)
}

fn removals_before_additions<T>(records: Vec<ChangeRecord<T>>) -> Vec<ChangeRecord<T>>
where
    T: PartialEq + Clone + Debug,
{
    let mut result = Vec::with_capacity(records.len());
    let mut added = Vec::new();

    for record in records {
        match record {
            ChangeRecord::Removed(_) => result.push(record),
            ChangeRecord::Added(_) => added.push(record),
            ChangeRecord::Kept(_) => {
                result.append(&mut added);
                result.push(record);
            }
        }
    }
    result.append(&mut added);

    result
}

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, only `x` is kept because `y`
/// can be computed from `x - k`.
///
/// `k` can be negative, so `V` wraps a Vec plus an `offset` mapping every
/// possible `k` to a non-negative index.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: to_isize(max_d),
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output { &self.v[(index + self.offset).unsigned_abs()] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        &mut self.v[(index + self.offset).unsigned_abs()]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// Find the middle snake of an optimal D-path by running the greedy search
/// forwards from `(0, 0)` and backwards from `(N, M)` until the two
/// furthest reaching paths overlap.
///
/// Returns the start of the middle snake in absolute token indices.
fn find_middle_snake<T>(
    old: &[Token<T>],
    old_range: Range<usize>,
    new: &[Token<T>],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    T: PartialEq + Clone + Debug,
{
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = to_isize(n) - to_isize(m);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    assert!(vf.len() >= d_max);
    assert!(vb.len() >= d_max);

    for d in 0..to_isize(d_max) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = (to_isize(x) - k).unsigned_abs();

            // The coordinate of the start of a snake
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    &old[old_range.start + x..old_range.end],
                    &new[new_range.start + y..new_range.end],
                );
            }

            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = (to_isize(x) - k).unsigned_abs();

            if x < n && y < m {
                let advance = common_suffix_len(
                    &old[old_range.start..old_range.start + n - x],
                    &new[new_range.start..new_range.start + m - y],
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<T>(
    old: &[Token<T>],
    mut old_range: Range<usize>,
    new: &[Token<T>],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<ChangeRecord<T>>,
) where
    T: PartialEq + Clone + Debug,
{
    let prefix_len = common_prefix_len(&old[old_range.clone()], &new[new_range.clone()]);
    result.extend(
        old[old_range.start..old_range.start + prefix_len]
            .iter()
            .cloned()
            .map(ChangeRecord::Kept),
    );
    old_range.start += prefix_len;
    new_range.start += prefix_len;

    let suffix_len = common_suffix_len(&old[old_range.clone()], &new[new_range.clone()]);
    let suffix_start = old_range.end - suffix_len;
    old_range.end -= suffix_len;
    new_range.end -= suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left between the common prefix and suffix
    } else if new_range.is_empty() {
        result.extend(old[old_range].iter().cloned().map(ChangeRecord::Removed));
    } else if old_range.is_empty() {
        result.extend(new[new_range].iter().cloned().map(ChangeRecord::Added));
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        result.extend(old[old_range].iter().cloned().map(ChangeRecord::Removed));
        result.extend(new[new_range].iter().cloned().map(ChangeRecord::Added));
    }

    result.extend(
        old[suffix_start..suffix_start + suffix_len]
            .iter()
            .cloned()
            .map(ChangeRecord::Kept),
    );
}
