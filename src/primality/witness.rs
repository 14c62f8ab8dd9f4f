//! Deterministic Miller-Rabin witness sets.
//!
//! Each entry pairs an exclusive upper bound with a set of bases that no
//! composite below the bound can fool. Entries are sorted by bound; the
//! first bound strictly greater than `n` selects the set.

/// `(bound, witnesses)`: the witnesses decide every `n < bound`.
pub const WITNESS_TABLE: [(u64, &[u64]); 11] = [
    (2_047, &[2]),
    (1_373_653, &[2, 3]),
    (9_080_191, &[31, 73]),
    (25_326_001, &[2, 3, 5]),
    (3_215_031_751, &[2, 3, 5, 7]),
    (4_759_123_141, &[2, 7, 61]),
    (1_122_004_669_633, &[2, 13, 23, 1_662_803]),
    (2_152_302_898_747, &[2, 3, 5, 7, 11]),
    (3_474_749_660_383, &[2, 3, 5, 7, 11, 13]),
    (341_550_071_728_321, &[2, 3, 5, 7, 11, 13, 17]),
    (3_825_123_056_546_413_051, &[2, 3, 5, 7, 11, 13, 17, 19, 23]),
];

/// Exclusive upper bound of the tabulated range.
pub const MAX_TABULATED_BOUND: u64 = WITNESS_TABLE[WITNESS_TABLE.len() - 1].0;

/// The first twelve primes. Deterministic for every n < 3.317 * 10^24, which
/// covers all of `u64`.
pub const FULL_RANGE_WITNESSES: &[u64] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Looks up the witness set for `n`, or `None` when `n` is at or above
/// [`MAX_TABULATED_BOUND`].
pub fn witnesses_for(n: u64) -> Option<&'static [u64]> {
    WITNESS_TABLE
        .iter()
        .find(|(bound, _)| n < *bound)
        .map(|(_, witnesses)| *witnesses)
}
