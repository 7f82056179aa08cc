//! Bit-vector solution representation.

/// A candidate selection of items: one bit per item, index-aligned with
/// the instance's item list.
///
/// The length is fixed at construction and never changes. Mutation is
/// limited to flipping or setting individual bits; engines clone a
/// solution before mutating it so that "current" and "best" trackers
/// never share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    bits: Vec<bool>,
}

impl Solution {
    /// Creates the all-zero solution (no item selected) for `len` items.
    pub fn empty(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Number of items this solution ranges over.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the solution ranges over zero items.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether item `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Marks item `index` as selected.
    pub fn select(&mut self, index: usize) {
        self.bits[index] = true;
    }

    /// Toggles the selection of item `index`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Iterator over the indices of all selected items.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &selected)| selected.then_some(i))
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Profit and weight of a solution, as computed by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Total profit over the selected items.
    pub profit: u64,
    /// Total weight over the selected items.
    pub weight: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_selection() {
        let solution = Solution::empty(5);
        assert_eq!(solution.len(), 5);
        assert_eq!(solution.selected_count(), 0);
        assert!(solution.selected_indices().next().is_none());
    }

    #[test]
    fn test_flip_toggles() {
        let mut solution = Solution::empty(3);
        solution.flip(1);
        assert!(solution.is_selected(1));
        solution.flip(1);
        assert!(!solution.is_selected(1));
    }

    #[test]
    fn test_selected_indices_in_order() {
        let mut solution = Solution::empty(4);
        solution.select(3);
        solution.select(0);
        let indices: Vec<usize> = solution.selected_indices().collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_zero_length_solution() {
        let solution = Solution::empty(0);
        assert!(solution.is_empty());
        assert_eq!(solution.selected_count(), 0);
    }
}
