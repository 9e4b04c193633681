//! Bounded draws from the generator's pseudo-random stream.

use rand_chacha::rand_core::Rng;

pub(crate) fn uniform_inclusive<R: Rng>(rng: &mut R, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value) as u64 + 1;
    min_value + (rng.next_u64() % range_size) as usize
}

pub(crate) fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[uniform_inclusive(rng, 0, items.len() - 1)]
}
