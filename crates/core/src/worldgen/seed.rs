//! Deterministic seed mixing and the small random-draw helpers the
//! generation stages share.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Sub-seed for one generation attempt. Every attempt gets an independent
/// RNG stream so a failed attempt leaves no trace in the next one.
pub(super) fn derive_attempt_seed(run_seed: u64, attempt: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= (attempt as u64 + 1).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

/// Uniform index in `[0, len)`.
pub(super) fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    rng.next_u64() as usize % len
}

/// In-place Fisher-Yates shuffle.
pub(super) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = pick_index(rng, i + 1);
        items.swap(i, j);
    }
}
