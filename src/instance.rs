//! Problem instance: items, capacity, validation, and efficiency ordering.

use thiserror::Error;

/// A single knapsack item: a positive integer weight and a non-negative
/// real profit.
///
/// Items are referenced by their stable index into the owning
/// [`Instance`]; an item itself is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed by the item. Must be strictly positive.
    pub weight: u32,

    /// Profit earned by selecting the item. Must be finite and non-negative.
    pub profit: f64,
}

impl Item {
    pub fn new(weight: u32, profit: f64) -> Self {
        Self { weight, profit }
    }

    /// Profit per unit of weight. Ranks items for the greedy and
    /// bound computations.
    pub fn efficiency(&self) -> f64 {
        self.profit / self.weight as f64
    }
}

/// Rejected instance data, detected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("item {index} has zero weight; weights must be positive")]
    ZeroWeight { index: usize },

    #[error("item {index} has profit {profit}; profits must be finite and non-negative")]
    InvalidProfit { index: usize, profit: f64 },
}

/// An immutable 0/1 knapsack instance: an ordered item sequence and an
/// integer capacity.
///
/// The sequence order is significant for [`CriticalItem`] and
/// [`HorowitzSahni`], which require non-increasing efficiency order
/// (see [`Instance::sorted_by_efficiency`]); [`BruteForce`] is
/// order-insensitive. An empty instance is valid and solves to profit 0.
///
/// [`BruteForce`]: crate::BruteForce
/// [`CriticalItem`]: crate::CriticalItem
/// [`HorowitzSahni`]: crate::HorowitzSahni
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    items: Vec<Item>,
    capacity: u64,
}

impl Instance {
    /// Builds a validated instance. Rejects zero weights and negative or
    /// non-finite profits; nothing is checked again during a solve.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, InstanceError> {
        for (index, item) in items.iter().enumerate() {
            if item.weight == 0 {
                return Err(InstanceError::ZeroWeight { index });
            }
            if !item.profit.is_finite() || item.profit < 0.0 {
                return Err(InstanceError::InvalidProfit {
                    index,
                    profit: item.profit,
                });
            }
        }
        Ok(Self { items, capacity })
    }

    /// Builds an instance from parallel weight/profit slices.
    pub fn from_parts(weights: &[u32], profits: &[f64], capacity: u64) -> Result<Self, InstanceError> {
        debug_assert_eq!(weights.len(), profits.len());
        let items = weights
            .iter()
            .zip(profits)
            .map(|(&weight, &profit)| Item { weight, profit })
            .collect();
        Self::new(items, capacity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Item {
        self.items[index]
    }

    /// Weight of one item, widened so that sums over any subset fit `u64`
    /// without truncation.
    pub fn weight(&self, index: usize) -> u64 {
        u64::from(self.items[index].weight)
    }

    pub fn profit(&self, index: usize) -> f64 {
        self.items[index].profit
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.weight)).sum()
    }

    /// Reorders the items by non-increasing efficiency, the precondition
    /// of the critical-item and Horowitz-Sahni solvers. The sort is
    /// stable, so equal-efficiency items keep their relative order.
    pub fn sorted_by_efficiency(mut self) -> Self {
        self.items
            .sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));
        self
    }

    /// Whether the items are already in non-increasing efficiency order.
    pub fn is_sorted_by_efficiency(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| pair[0].efficiency() >= pair[1].efficiency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_items() {
        let instance = Instance::new(vec![Item::new(3, 7.0), Item::new(1, 0.0)], 10).unwrap();
        assert_eq!(instance.len(), 2);
        assert_eq!(instance.capacity(), 10);
        assert_eq!(instance.total_weight(), 4);
    }

    #[test]
    fn test_new_rejects_zero_weight() {
        let err = Instance::new(vec![Item::new(0, 1.0)], 10).unwrap_err();
        assert_eq!(err, InstanceError::ZeroWeight { index: 0 });
    }

    #[test]
    fn test_new_rejects_negative_profit() {
        let err = Instance::new(vec![Item::new(2, -1.0)], 10).unwrap_err();
        assert!(matches!(err, InstanceError::InvalidProfit { index: 0, .. }));
    }

    #[test]
    fn test_new_rejects_nan_profit() {
        let err = Instance::new(vec![Item::new(2, f64::NAN)], 10).unwrap_err();
        assert!(matches!(err, InstanceError::InvalidProfit { index: 0, .. }));
    }

    #[test]
    fn test_from_parts() {
        let instance = Instance::from_parts(&[5, 2], &[10.0, 4.0], 7).unwrap();
        assert_eq!(instance.item(1), Item::new(2, 4.0));
    }

    #[test]
    fn test_sorted_by_efficiency() {
        let instance = Instance::new(
            vec![Item::new(30, 120.0), Item::new(10, 60.0), Item::new(20, 100.0)],
            50,
        )
        .unwrap();
        assert!(!instance.is_sorted_by_efficiency());

        let sorted = instance.sorted_by_efficiency();
        assert!(sorted.is_sorted_by_efficiency());
        assert_eq!(sorted.item(0), Item::new(10, 60.0));
        assert_eq!(sorted.item(2), Item::new(30, 120.0));
    }

    #[test]
    fn test_sort_is_stable_for_equal_efficiency() {
        let instance = Instance::new(
            vec![Item::new(10, 10.0), Item::new(5, 5.0), Item::new(2, 4.0)],
            10,
        )
        .unwrap();
        let sorted = instance.sorted_by_efficiency();
        // The 2.0-efficiency item leads; the two 1.0-efficiency items
        // keep their original relative order.
        assert_eq!(sorted.item(0), Item::new(2, 4.0));
        assert_eq!(sorted.item(1), Item::new(10, 10.0));
        assert_eq!(sorted.item(2), Item::new(5, 5.0));
    }

    #[test]
    fn test_empty_instance_is_valid() {
        let instance = Instance::new(Vec::new(), 0).unwrap();
        assert!(instance.is_empty());
        assert!(instance.is_sorted_by_efficiency());
    }
}
