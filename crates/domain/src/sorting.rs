//! Sorting strategies — interchangeable in-place sorts behind one context.

use serde::{Deserialize, Serialize};

/// An in-place ascending sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Adjacent-swap passes. Stable, always runs every pass.
    Bubble,
    /// Lomuto partition around the last element. Not stable.
    Quick,
}

impl SortStrategy {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Quick => "Quick Sort",
        }
    }

    pub fn sort<T: Ord>(self, items: &mut [T]) {
        match self {
            Self::Bubble => bubble_sort(items),
            Self::Quick => quick_sort(items),
        }
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn bubble_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
            }
        }
    }
}

/// Recurses into the smaller partition and loops over the larger one, so
/// stack depth stays logarithmic even on sorted or all-equal input.
fn quick_sort<T: Ord>(mut items: &mut [T]) {
    while items.len() > 1 {
        let pivot = partition(items);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}

/// Move every element `<=` the last one before it and return the pivot's
/// final index.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let high = items.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if items[j] <= items[high] {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}

/// Sorting context. A strategy is required up front, so there is no way to
/// sort without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorter {
    strategy: SortStrategy,
}

impl Sorter {
    #[must_use]
    pub fn new(strategy: SortStrategy) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: SortStrategy) {
        self.strategy = strategy;
    }

    #[must_use]
    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Sort `items` in place with the active strategy.
    pub fn sort<T: Ord>(&self, items: &mut [T]) {
        self.strategy.sort(items);
    }
}
