use std::fmt::Display;

/// The kind of pending edit a tracked buffer position stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// The character only exists in the old text and may be struck out.
    Removal,

    /// The character only exists in the new text and may be kept or retracted.
    Insertion,
}

/// The shared output of a morph: a growable character sequence plus the two
/// LIFO stacks of pending edits pointing into it.
///
/// Positions are absolute character indices. The stacks live inside the
/// buffer so that every removal goes through `remove`, which is the only way
/// to keep the positions of both stacks valid.
#[derive(Debug, Default)]
pub struct MorphBuffer {
    chars: Vec<char>,
    removals: Vec<usize>,
    insertions: Vec<usize>,
}

impl MorphBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            removals: Vec::new(),
            insertions: Vec::new(),
        }
    }

    /// Append text that isn't subject to the budget.
    pub fn push_str(&mut self, text: &str) { self.chars.extend(text.chars()); }

    /// Append a character and track its position as a pending edit.
    pub fn push_candidate(&mut self, char: char, candidate: Candidate) {
        let index = self.chars.len();
        self.chars.push(char);
        self.stack_mut(candidate).push(index);
    }

    /// Pop the most recently tracked position of a stack without touching the
    /// text.
    pub fn pop_candidate(&mut self, candidate: Candidate) -> Option<usize> {
        self.stack_mut(candidate).pop()
    }

    pub fn candidates(&self, candidate: Candidate) -> &[usize] {
        match candidate {
            Candidate::Removal => &self.removals,
            Candidate::Insertion => &self.insertions,
        }
    }

    /// Forget every pending edit, leaving the text as it is.
    pub fn clear_candidates(&mut self) {
        self.removals.clear();
        self.insertions.clear();
    }

    /// Delete the character at `index` and shift every tracked position after
    /// it one to the left, in both stacks.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds: positions are only ever derived
    /// from the buffer itself, so that is a bug in the caller.
    pub fn remove(&mut self, index: usize) -> char {
        assert!(
            index < self.chars.len(),
            "Cannot remove position {index} from a buffer of {} characters",
            self.chars.len()
        );

        let removed = self.chars.remove(index);
        for position in self.removals.iter_mut().chain(self.insertions.iter_mut()) {
            if *position > index {
                *position -= 1;
            }
        }

        removed
    }

    fn stack_mut(&mut self, candidate: Candidate) -> &mut Vec<usize> {
        match candidate {
            Candidate::Removal => &mut self.removals,
            Candidate::Insertion => &mut self.insertions,
        }
    }
}

impl Display for MorphBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|char| write!(f, "{char}"))
    }
}
