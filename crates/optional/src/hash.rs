use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Mixed into every present optional's hash ahead of the wrapped value.
pub(crate) const PRESENT_SEED: u32 = 0x598d_f91c;
/// The whole hash input of an absent optional.
pub(crate) const ABSENT_SEED: u32 = 0x79a3_1aac;

/// Stable hash code: the same input always yields the same value, in every
/// process, unlike `std`'s randomly keyed `RandomState`.
pub(crate) fn hash_code<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_code_is_deterministic() {
        assert_eq!(hash_code(&42u32), hash_code(&42u32));
        assert_eq!(hash_code("text"), hash_code("text"));
    }

    #[test]
    fn seeds_are_distinct() {
        assert_ne!(PRESENT_SEED, ABSENT_SEED);
        assert_ne!(hash_code(&PRESENT_SEED), hash_code(&ABSENT_SEED));
    }
}
