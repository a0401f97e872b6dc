//! Fingerprints for comparing runs bit-for-bit.
//!
//! Uses FNV-1a over the IEEE-754 bit patterns of every recorded value.
//! Not cryptographically secure; intended for fast determinism checks
//! and regression baselines.

use crate::series::BalanceRun;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a series of `f64` values by their bit patterns.
///
/// `0.0` and `-0.0` hash differently, as do distinct NaN payloads.
pub fn series_hash(values: &[f64]) -> u64 {
    fold_series(FNV_OFFSET, values)
}

fn fold_series(mut hash: u64, values: &[f64]) -> u64 {
    hash = fnv1a_u64(hash, values.len() as u64);
    for &v in values {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}

/// Hash every series recorded in `run`, in a fixed order.
///
/// Series lengths are folded in at each boundary so that values cannot
/// shift between adjacent series without changing the hash.
pub fn run_fingerprint(run: &BalanceRun) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, run.n_layers() as u64);
    for series in [
        run.thicknesses(),
        run.initial_water(),
        run.water_content().as_slice(),
        run.throughfall(),
        run.demand(),
        run.transpired(),
        run.unmet_demand(),
        run.drainage_lost(),
        run.clamped(),
    ] {
        hash = fold_series(hash, series);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_stable() {
        assert_eq!(series_hash(&[]), series_hash(&[]));
        assert_ne!(series_hash(&[]), series_hash(&[0.0]));
    }

    #[test]
    fn order_matters() {
        assert_ne!(series_hash(&[1.0, 2.0]), series_hash(&[2.0, 1.0]));
    }

    #[test]
    fn signed_zero_distinguished() {
        assert_ne!(series_hash(&[0.0]), series_hash(&[-0.0]));
    }

    #[test]
    fn last_bit_changes_hash() {
        let a = 0.1_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_ne!(series_hash(&[a]), series_hash(&[b]));
    }
}
