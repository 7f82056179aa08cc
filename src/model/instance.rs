//! Knapsack instances and the objective evaluator.

use super::solution::{Evaluation, Solution};

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Profit gained by selecting this item.
    pub profit: u64,
    /// Weight this item contributes toward the capacity.
    pub weight: u64,
}

/// A 0/1 knapsack problem instance.
///
/// Immutable after construction; both engines hold it read-only for the
/// duration of a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    name: String,
    capacity: u64,
    items: Vec<Item>,
}

impl Instance {
    pub fn new(name: impl Into<String>, capacity: u64, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            capacity,
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Computes the total profit and weight of a solution.
    ///
    /// Pure and O(n) in the item count. The solution must range over
    /// exactly this instance's items.
    pub fn evaluate(&self, solution: &Solution) -> Evaluation {
        debug_assert_eq!(solution.len(), self.items.len());
        let mut profit = 0u64;
        let mut weight = 0u64;
        for index in solution.selected_indices() {
            let item = &self.items[index];
            profit += item.profit;
            weight += item.weight;
        }
        Evaluation { profit, weight }
    }

    /// Whether the solution's total weight fits within the capacity.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.evaluate(solution).weight <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_item_instance() -> Instance {
        Instance::new(
            "test",
            10,
            vec![
                Item {
                    profit: 10,
                    weight: 5,
                },
                Item {
                    profit: 6,
                    weight: 4,
                },
                Item {
                    profit: 9,
                    weight: 6,
                },
            ],
        )
    }

    #[test]
    fn test_evaluate_empty_selection() {
        let instance = three_item_instance();
        let solution = Solution::empty(3);
        let eval = instance.evaluate(&solution);
        assert_eq!(eval.profit, 0);
        assert_eq!(eval.weight, 0);
    }

    #[test]
    fn test_evaluate_sums_selected() {
        let instance = three_item_instance();
        let mut solution = Solution::empty(3);
        solution.select(0);
        solution.select(1);
        let eval = instance.evaluate(&solution);
        assert_eq!(eval.profit, 16);
        assert_eq!(eval.weight, 9);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let instance = three_item_instance();
        let mut solution = Solution::empty(3);
        solution.select(2);
        assert_eq!(instance.evaluate(&solution), instance.evaluate(&solution));
    }

    #[test]
    fn test_feasibility_boundary() {
        let instance = three_item_instance();
        let mut solution = Solution::empty(3);
        solution.select(1);
        solution.select(2);
        // weight 10 == capacity 10
        assert!(instance.is_feasible(&solution));
        solution.select(0);
        assert!(!instance.is_feasible(&solution));
    }

    #[test]
    fn test_zero_item_instance() {
        let instance = Instance::new("empty", 100, vec![]);
        let solution = Solution::empty(0);
        let eval = instance.evaluate(&solution);
        assert_eq!(eval.profit, 0);
        assert_eq!(eval.weight, 0);
        assert!(instance.is_feasible(&solution));
    }
}
