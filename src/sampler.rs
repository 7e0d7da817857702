use rand::distributions::Uniform;
use rand::prelude::*;
use tracing::{debug, trace};

use crate::error::SamplerError;

/// Pool of items handed out one at a time, uniformly at random, with no
/// repeats until the pool runs dry and refills itself.
///
/// Items move between two sequences: `available` (not yet picked this
/// cycle) and `chosen` (picked this cycle, in pick order). A reset moves
/// everything in `chosen` back into `available`. Resets happen
/// automatically on exhaustion or when a pick threshold is reached, or
/// manually via [`UniqueSampler::reset`].
pub struct UniqueSampler<T, R> {
    available: Vec<T>,
    chosen: Vec<T>,
    reset_threshold: Option<usize>,
    reset_count: u64,
    last_reset_was_automatic: bool,
    rng: R,
}

impl<T: Clone> UniqueSampler<T, SmallRng> {
    pub fn with_small_rng(items: Vec<T>) -> Result<Self, SamplerError> {
        Self::new(items, SmallRng::from_rng(thread_rng()).unwrap())
    }
}

impl<T: Clone, R: Rng> UniqueSampler<T, R> {
    /// Rejects an empty pool: every later `pick` relies on `available`
    /// being non-empty.
    pub fn new(items: Vec<T>, rng: R) -> Result<Self, SamplerError> {
        if items.is_empty() {
            return Err(SamplerError::EmptyPool);
        }
        Ok(Self {
            available: items,
            chosen: Vec::new(),
            reset_threshold: None,
            reset_count: 0,
            last_reset_was_automatic: true,
            rng,
        })
    }

    /// Force a refill once `picks` items have been picked in a cycle, even
    /// while unpicked items remain.
    pub fn reset_after(mut self, picks: usize) -> Self {
        self.reset_threshold = Some(picks);
        self
    }

    /// Treat `items` as already picked: they stay out of the pool until the
    /// first reset returns them. They count toward the reset threshold.
    pub fn exclude(mut self, items: Vec<T>) -> Self {
        self.chosen = items;
        self
    }

    /// Returns a random item that has not been picked since the last reset.
    ///
    /// When the pick empties the pool (or hits the threshold), the pool
    /// refills from `chosen` and the returned item sits out the fresh cycle
    /// in `chosen`, rejoining at the next reset. It is never dropped.
    pub fn pick(&mut self) -> T {
        debug_assert!(!self.available.is_empty());
        let index = Uniform::new(0, self.available.len()).sample(&mut self.rng);
        // `available` is an unordered bag; removal swaps in the last element.
        let element = self.available.swap_remove(index);

        let exhausted = self.available.is_empty();
        let over_threshold = self
            .reset_threshold
            .map_or(false, |limit| self.chosen.len() + 1 >= limit);

        if exhausted && self.chosen.is_empty() {
            // Single-item pool: record the pick first so the refill has
            // something to restore.
            self.chosen.push(element.clone());
            self.refill(true);
        } else if exhausted || over_threshold {
            self.refill(true);
            self.chosen.push(element.clone());
        } else {
            self.chosen.push(element.clone());
        }
        trace!(remaining = self.available.len(), "picked one item");
        element
    }

    /// Puts all picked items back so the next cycle draws from the full
    /// pool. Usable in any state.
    pub fn reset(&mut self) {
        self.refill(false);
    }

    fn refill(&mut self, automatic: bool) {
        self.available.append(&mut self.chosen);
        self.last_reset_was_automatic = automatic;
        self.reset_count += 1;
        debug!(reset_count = self.reset_count, automatic, "pool refilled");
    }

    /// Items not yet picked this cycle. Order is not meaningful.
    pub fn available(&self) -> &[T] {
        &self.available
    }

    /// Items picked this cycle, in pick order.
    pub fn chosen(&self) -> &[T] {
        &self.chosen
    }

    /// How many resets, automatic or manual, have happened so far.
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    pub fn last_reset_was_automatic(&self) -> bool {
        self.last_reset_was_automatic
    }
}
