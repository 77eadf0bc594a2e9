#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of character edits a single `morph` invocation may commit.
///
/// Revealing an inserted character or striking a stale one costs exactly one
/// unit. The same `Budget` is threaded through every line of a morph, so
/// earlier lines exhaust it before later lines get any. Whatever is left is
/// handed back to the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budget {
    remaining: usize,
    spent: usize,
}

impl Budget {
    #[must_use]
    pub fn new(amount: usize) -> Self {
        Self {
            remaining: amount,
            spent: 0,
        }
    }

    /// Create a budget from a signed amount; negative amounts mean no budget.
    #[must_use]
    pub fn from_signed(amount: i64) -> Self { Self::new(usize::try_from(amount).unwrap_or(0)) }

    #[must_use]
    pub fn remaining(&self) -> usize { self.remaining }

    /// Number of edits committed since the budget was created.
    #[must_use]
    pub fn spent(&self) -> usize { self.spent }

    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.remaining == 0 }

    /// Consume a single unit if there is one left.
    pub fn try_spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        self.spent += 1;
        true
    }

    /// Consume up to `wanted` units and return how many were granted.
    pub fn spend_up_to(&mut self, wanted: usize) -> usize {
        let granted = wanted.min(self.remaining);
        self.remaining -= granted;
        self.spent += granted;
        granted
    }
}

impl From<usize> for Budget {
    fn from(amount: usize) -> Self { Self::new(amount) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(-5, 0)]
    #[test_case(0, 0)]
    #[test_case(7, 7)]
    fn test_from_signed(amount: i64, expected: usize) {
        assert_eq!(Budget::from_signed(amount).remaining(), expected);
    }

    #[test]
    fn test_try_spend_stops_at_zero() {
        let mut budget = Budget::new(2);

        assert!(budget.try_spend());
        assert!(budget.try_spend());
        assert!(!budget.try_spend());
        assert!(budget.is_exhausted());
        assert_eq!(budget.spent(), 2);
    }

    #[test]
    fn test_spend_up_to() {
        let mut budget = Budget::new(5);

        assert_eq!(budget.spend_up_to(3), 3);
        assert_eq!(budget.spend_up_to(3), 2);
        assert_eq!(budget.spend_up_to(3), 0);
        assert_eq!(budget, Budget { remaining: 0, spent: 5 });
    }
}
