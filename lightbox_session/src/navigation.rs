// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced image navigation: `Idle → Transitioning → Idle`.
//!
//! A navigation request marks the coordinator as transitioning immediately
//! (so interaction can be suppressed and a fade shown), but the active index
//! swaps only when [`Navigator::poll`] observes that the transition deadline
//! has passed. A request arriving while a transition is already in flight is
//! dropped, so rapid repeated `next` calls advance exactly one step per
//! transition window and the index can never change mid-animation.
//!
//! Time is caller-supplied milliseconds; the coordinator owns no timer.

/// Navigation coordinator over a linear image collection.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    active: usize,
    count: usize,
    pending: Option<Pending>,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    target: usize,
    deadline: u64,
}

impl Navigator {
    /// Creates a coordinator over `count` images, starting at `start`
    /// clamped into range.
    ///
    /// An empty collection pins the index at 0.
    #[must_use]
    pub fn new(count: usize, start: usize) -> Self {
        Self {
            active: start.min(count.saturating_sub(1)),
            count,
            pending: None,
        }
    }

    /// The currently active image index.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of images in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` while a navigation transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` when the active image is the first one.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    /// Returns `true` when the active image is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.count == 0 || self.active + 1 == self.count
    }

    /// Requests navigation to `index`, clamped into range.
    ///
    /// Returns `true` when a transition was started. Requests for the
    /// current index, on an empty collection, or while another transition is
    /// in flight are dropped.
    pub fn request(&mut self, index: usize, now: u64, delay_ms: u64) -> bool {
        if self.pending.is_some() || self.count == 0 {
            return false;
        }
        let target = index.min(self.count - 1);
        if target == self.active {
            return false;
        }
        self.pending = Some(Pending {
            target,
            deadline: now.saturating_add(delay_ms),
        });
        true
    }

    /// Requests the next image; a no-op on the last one.
    pub fn next(&mut self, now: u64, delay_ms: u64) -> bool {
        self.request(self.active.saturating_add(1), now, delay_ms)
    }

    /// Requests the previous image; a no-op on the first one.
    pub fn previous(&mut self, now: u64, delay_ms: u64) -> bool {
        self.request(self.active.saturating_sub(1), now, delay_ms)
    }

    /// Completes the in-flight transition once its deadline has passed,
    /// returning the newly active index.
    pub fn poll(&mut self, now: u64) -> Option<usize> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.active = pending.target;
        self.pending = None;
        Some(self.active)
    }

    /// Replaces the collection wholesale: `count` images, active index 0, no
    /// transition in flight.
    pub fn replace(&mut self, count: usize) {
        self.active = 0;
        self.count = count;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;

    const DELAY: u64 = 150;

    #[test]
    fn start_index_is_clamped_into_range() {
        assert_eq!(Navigator::new(5, 99).active(), 4);
        assert_eq!(Navigator::new(5, 2).active(), 2);
        assert_eq!(Navigator::new(0, 3).active(), 0);
    }

    #[test]
    fn index_swaps_only_after_the_deadline() {
        let mut nav = Navigator::new(3, 0);
        assert!(nav.request(2, 1_000, DELAY));
        assert!(nav.is_transitioning());
        assert_eq!(nav.active(), 0);

        assert_eq!(nav.poll(1_100), None);
        assert_eq!(nav.active(), 0);

        assert_eq!(nav.poll(1_150), Some(2));
        assert_eq!(nav.active(), 2);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn requests_during_a_transition_are_dropped() {
        let mut nav = Navigator::new(5, 0);
        assert!(nav.next(0, DELAY));
        // A flurry of repeat presses inside the window.
        assert!(!nav.next(10, DELAY));
        assert!(!nav.next(50, DELAY));
        assert!(!nav.request(4, 100, DELAY));

        assert_eq!(nav.poll(DELAY), Some(1));
        // Exactly one step, not four.
        assert_eq!(nav.active(), 1);
    }

    #[test]
    fn same_index_and_out_of_range_requests() {
        let mut nav = Navigator::new(3, 1);
        assert!(!nav.request(1, 0, DELAY));

        // Out of range clamps to the last image.
        assert!(nav.request(99, 0, DELAY));
        assert_eq!(nav.poll(DELAY), Some(2));

        // Clamped-to-current is also a no-op.
        assert!(!nav.request(99, 500, DELAY));
    }

    #[test]
    fn edges_are_no_ops() {
        let mut nav = Navigator::new(2, 0);
        assert!(!nav.previous(0, DELAY));
        assert!(nav.next(0, DELAY));
        nav.poll(DELAY);
        assert!(!nav.next(200, DELAY));

        let mut empty = Navigator::new(0, 0);
        assert!(!empty.next(0, DELAY));
        assert!(!empty.request(0, 0, DELAY));
    }

    #[test]
    fn first_and_last_flags() {
        let mut nav = Navigator::new(3, 0);
        assert!(nav.is_first());
        assert!(!nav.is_last());
        nav.request(2, 0, DELAY);
        nav.poll(DELAY);
        assert!(!nav.is_first());
        assert!(nav.is_last());

        let empty = Navigator::new(0, 0);
        assert!(empty.is_first());
        assert!(empty.is_last());
    }

    #[test]
    fn replace_resets_index_and_cancels_the_transition() {
        let mut nav = Navigator::new(4, 0);
        nav.next(0, DELAY);
        nav.replace(2);
        assert_eq!(nav.active(), 0);
        assert!(!nav.is_transitioning());
        // The old pending target must not land after the swap.
        assert_eq!(nav.poll(10_000), None);
    }

    #[test]
    fn poll_without_a_request_is_a_no_op() {
        let mut nav = Navigator::new(3, 1);
        assert_eq!(nav.poll(u64::MAX), None);
        assert_eq!(nav.active(), 1);
    }
}
