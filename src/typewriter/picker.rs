//! Fragment selection strategies.
//!
//! The typewriter never calls a random number generator directly. It asks a
//! [`FragmentPicker`] for an index instead, so tests can swap in a fixed
//! sequence and assert exact output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which fragment to append next.
///
/// Implementations should pick uniformly over `0..len` and independently
/// across calls. The typewriter reduces out-of-range results modulo `len`,
/// so a sloppy picker degrades the distribution but never breaks the stream.
pub trait FragmentPicker {
    /// Pick an index in `0..len`. `len` is always at least 1.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: FragmentPicker + ?Sized> FragmentPicker for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Type-erased picker, for callers that choose the strategy at runtime.
pub type BoxedPicker = Box<dyn FragmentPicker>;

/// Uniform picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl FragmentPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform picker with a fixed seed, for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    /// Create a picker whose choices are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FragmentPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
///
/// An empty list always yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequencePicker {
    indices: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            next: 0,
        }
    }
}

impl FragmentPicker for SequencePicker {
    fn pick(&mut self, _len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next = self.next.wrapping_add(1);
        index
    }
}

/// Build a boxed picker: seeded when a seed is given, thread RNG otherwise.
pub fn picker_for_seed(seed: Option<u64>) -> BoxedPicker {
    match seed {
        Some(seed) => Box::new(SeededPicker::new(seed)),
        None => Box::new(ThreadRngPicker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_picker_stays_in_range() {
        let mut picker = ThreadRngPicker;
        for _ in 0..1_000 {
            assert!(picker.pick(7) < 7);
        }
    }

    #[test]
    fn thread_rng_picker_handles_single_element() {
        let mut picker = ThreadRngPicker;
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn seeded_pickers_with_same_seed_agree() {
        let mut a = SeededPicker::new(42);
        let mut b = SeededPicker::new(42);
        let left: Vec<usize> = (0..50).map(|_| a.pick(28)).collect();
        let right: Vec<usize> = (0..50).map(|_| b.pick(28)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn seeded_picker_visits_every_index_eventually() {
        let mut picker = SeededPicker::new(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[picker.pick(5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn sequence_picker_cycles() {
        let mut picker = SequencePicker::new(vec![2, 0, 1]);
        let picks: Vec<usize> = (0..7).map(|_| picker.pick(3)).collect();
        assert_eq!(picks, vec![2, 0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn empty_sequence_picker_yields_zero() {
        let mut picker = SequencePicker::default();
        assert_eq!(picker.pick(4), 0);
        assert_eq!(picker.pick(4), 0);
    }

    #[test]
    fn boxed_picker_delegates() {
        let mut picker: BoxedPicker = Box::new(SequencePicker::new(vec![3]));
        assert_eq!(picker.pick(5), 3);
    }

    #[test]
    fn picker_for_seed_is_deterministic_when_seeded() {
        let mut a = picker_for_seed(Some(9));
        let mut b = picker_for_seed(Some(9));
        for _ in 0..20 {
            assert_eq!(a.pick(10), b.pick(10));
        }
    }
}
