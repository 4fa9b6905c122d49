//! Branch-and-bound search loop.

use crate::instance::Instance;

/// Result of a Horowitz-Sahni run.
#[derive(Debug, Clone, PartialEq)]
pub struct HorowitzSahniResult {
    /// `search_profit` plus the best-fit add-on item's profit. Kept for
    /// interface compatibility with the critical-item heuristic; with
    /// all profits positive the add-on never improves an exact search
    /// within its true residual, so any nonzero add-on here is the
    /// same full-capacity estimate the heuristic reports.
    pub max_profit: f64,

    /// Exact optimum found by the search phase.
    pub search_profit: f64,

    /// Item indices of the incumbent optimal solution, ascending.
    pub selection: Vec<usize>,

    /// Best-fit add-on item folded into `max_profit`, if any.
    pub add_on: Option<usize>,

    /// Branches abandoned because the fractional bound could not beat
    /// the incumbent.
    pub bound_prunes: usize,

    /// Backtracking moves performed.
    pub backtracks: usize,
}

/// Exact branch-and-bound solver.
///
/// Requires items in non-increasing efficiency order (see
/// [`Instance::sorted_by_efficiency`]).
pub struct HorowitzSahni;

impl HorowitzSahni {
    /// Runs the search to completion and applies the add-on step.
    pub fn run(instance: &Instance) -> HorowitzSahniResult {
        debug_assert!(instance.is_sorted_by_efficiency());

        let n = instance.len();
        if n == 0 {
            return HorowitzSahniResult {
                max_profit: 0.0,
                search_profit: 0.0,
                selection: Vec::new(),
                add_on: None,
                bound_prunes: 0,
                backtracks: 0,
            };
        }

        let mut search = Search::new(instance);
        search.run();

        let selection: Vec<usize> = (0..n).filter(|&i| search.best[i]).collect();

        // Post-processing: fold in the single most profitable
        // unselected item that fits the capacity on its own. Redundant
        // after an exact search, but mirrors the critical-item fix-up
        // rule so both interfaces report the same kind of value.
        let mut add_on = None;
        let mut add_on_profit = 0.0;
        for i in 0..n {
            if search.best[i] {
                continue;
            }
            if instance.weight(i) <= instance.capacity() && instance.profit(i) > add_on_profit {
                add_on_profit = instance.profit(i);
                add_on = Some(i);
            }
        }

        log::debug!(
            "horowitz-sahni: n={n} prunes={} backtracks={} optimum={}",
            search.bound_prunes,
            search.backtracks,
            search.incumbent_profit,
        );

        HorowitzSahniResult {
            max_profit: search.incumbent_profit + add_on_profit,
            search_profit: search.incumbent_profit,
            selection,
            add_on,
            bound_prunes: search.bound_prunes,
            backtracks: search.backtracks,
        }
    }
}

/// Working state of one search, owned by a single run.
///
/// `weights` and `profits` carry an explicit sentinel pseudo-item at
/// index `n` with zero profit and effectively infinite weight: forward
/// moves stop at it without special-casing, and the bound computation
/// can index one past the last real item with a vanishing fractional
/// term.
struct Search<'a> {
    instance: &'a Instance,
    weights: Vec<u64>,
    profits: Vec<f64>,

    /// Current partial solution, one bit per real item.
    taken: Vec<bool>,

    /// Best complete solution so far.
    best: Vec<bool>,
    incumbent_profit: f64,

    /// Profit of the current partial solution.
    running_profit: f64,

    /// Capacity still available to the current partial solution.
    available: u64,

    /// Next item to decide.
    cursor: usize,

    bound_prunes: usize,
    backtracks: usize,
}

impl<'a> Search<'a> {
    fn new(instance: &'a Instance) -> Self {
        let n = instance.len();
        let mut weights: Vec<u64> = (0..n).map(|i| instance.weight(i)).collect();
        let mut profits: Vec<f64> = (0..n).map(|i| instance.profit(i)).collect();
        weights.push(u64::MAX);
        profits.push(0.0);

        Self {
            instance,
            weights,
            profits,
            taken: vec![false; n],
            best: vec![false; n],
            incumbent_profit: 0.0,
            running_profit: 0.0,
            // Capacity beyond the total item weight is never binding;
            // clamping keeps the sentinel strictly heavier than any
            // reachable working capacity.
            available: instance.capacity().min(instance.total_weight()),
            cursor: 0,
            bound_prunes: 0,
            backtracks: 0,
        }
    }

    fn run(&mut self) {
        let n = self.instance.len();
        loop {
            // Bound check before every forward batch.
            if self.incumbent_profit >= self.running_profit + self.upper_bound() {
                self.bound_prunes += 1;
                if !self.backtrack() {
                    return;
                }
                continue;
            }

            // Forward move: take every consecutive fitting item. The
            // sentinel never fits, so the cursor stops at n.
            while self.weights[self.cursor] <= self.available {
                self.available -= self.weights[self.cursor];
                self.running_profit += self.profits[self.cursor];
                self.taken[self.cursor] = true;
                self.cursor += 1;
            }
            if self.cursor < n {
                // First non-fitting item: its decision is made.
                self.taken[self.cursor] = false;
                self.cursor += 1;
                if self.cursor < n {
                    continue;
                }
            }

            // Complete solution: update the incumbent, then force the
            // last item out to resume exploring alternatives.
            if self.running_profit > self.incumbent_profit {
                self.incumbent_profit = self.running_profit;
                self.best.copy_from_slice(&self.taken);
            }
            self.cursor = n - 1;
            if self.taken[n - 1] {
                self.available += self.weights[n - 1];
                self.running_profit -= self.profits[n - 1];
                self.taken[n - 1] = false;
            }
            if !self.backtrack() {
                return;
            }
        }
    }

    /// Fractional upper bound of the current partial solution: profits
    /// of the items from the cursor up to the first that no longer
    /// fits, plus that item's efficiency scaled by the capacity left
    /// over. Valid for real-valued profits (no flooring).
    fn upper_bound(&self) -> f64 {
        let mut weight_sum = 0u64;
        let mut profit_sum = 0.0;
        let mut r = self.cursor;
        while weight_sum.saturating_add(self.weights[r]) <= self.available {
            weight_sum += self.weights[r];
            profit_sum += self.profits[r];
            r += 1;
        }
        profit_sum + (self.available - weight_sum) as f64 * self.profits[r] / self.weights[r] as f64
    }

    /// Removes the highest-indexed included item before the cursor and
    /// resumes just past it. Returns `false` when nothing is included,
    /// which terminates the search.
    fn backtrack(&mut self) -> bool {
        match (0..self.cursor).rev().find(|&i| self.taken[i]) {
            None => false,
            Some(i) => {
                self.available += self.weights[i];
                self.running_profit -= self.profits[i];
                self.taken[i] = false;
                self.cursor = i + 1;
                self.backtracks += 1;
                true
            }
        }
    }
}
