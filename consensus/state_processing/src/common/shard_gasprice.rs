use safe_arith::{ArithError, SafeArith};
use std::cmp::{max, min};
use types::ChainSpec;

/// Compute the gas price following a confirmed shard header of `length` samples.
///
/// The price moves towards equilibrium by at least one unit per header and never leaves
/// `[spec.min_gasprice, spec.max_gasprice]` once inside it.
pub fn compute_updated_gasprice(
    prev_gasprice: u64,
    length: u64,
    adjustment_quotient: u64,
    spec: &ChainSpec,
) -> Result<u64, ArithError> {
    let target = spec.target_samples_per_block;
    if length > target {
        let delta = max(
            1,
            prev_gasprice
                .safe_mul(length.safe_sub(target)?)?
                .safe_div(target)?
                .safe_div(adjustment_quotient)?,
        );
        Ok(min(prev_gasprice.safe_add(delta)?, spec.max_gasprice))
    } else {
        let delta = max(
            1,
            prev_gasprice
                .safe_mul(target.safe_sub(length)?)?
                .safe_div(target)?
                .safe_div(adjustment_quotient)?,
        );
        max(prev_gasprice, spec.min_gasprice.safe_add(delta)?).safe_sub(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn adjustment_quotient(spec: &ChainSpec) -> u64 {
        spec.initial_active_shards * 32 * spec.gasprice_adjustment_coefficient
    }

    #[test]
    fn moves_at_least_one_unit() {
        let spec = ChainSpec::mainnet();
        let q = adjustment_quotient(&spec);
        let price = 1_000;

        assert_eq!(
            compute_updated_gasprice(price, spec.target_samples_per_block + 1, q, &spec),
            Ok(price + 1)
        );
        assert_eq!(
            compute_updated_gasprice(price, spec.target_samples_per_block, q, &spec),
            Ok(price - 1)
        );
        assert_eq!(compute_updated_gasprice(price, 0, q, &spec), Ok(price - 1));
    }

    #[test]
    fn large_deviation_scales_with_price() {
        let spec = ChainSpec::mainnet();
        let q = 1;
        let price = 1_000_000;
        let target = spec.target_samples_per_block;

        // Twice the target doubles the price, divided by the quotient.
        assert_eq!(
            compute_updated_gasprice(price, 2 * target, q, &spec),
            Ok(2 * price)
        );
        // An empty header takes the price straight to the floor.
        assert_eq!(
            compute_updated_gasprice(price, 0, q, &spec),
            Ok(spec.min_gasprice)
        );
    }

    #[test]
    fn clamps_at_bounds() {
        let spec = ChainSpec::mainnet();
        let q = adjustment_quotient(&spec);

        assert_eq!(
            compute_updated_gasprice(spec.max_gasprice, spec.max_samples_per_block, q, &spec),
            Ok(spec.max_gasprice)
        );
        assert_eq!(
            compute_updated_gasprice(spec.min_gasprice, 0, q, &spec),
            Ok(spec.min_gasprice)
        );
    }

    #[test]
    fn zero_quotient_is_an_error() {
        let spec = ChainSpec::mainnet();
        assert_eq!(
            compute_updated_gasprice(100, 0, 0, &spec),
            Err(ArithError::DivisionByZero)
        );
    }

    #[quickcheck]
    fn gasprice_stays_within_bounds(prev: u64, length: u64, coefficient: u8) -> bool {
        let spec = ChainSpec::mainnet();
        let range = spec.max_gasprice - spec.min_gasprice + 1;
        let prev = spec.min_gasprice + prev % range;
        let length = length % (spec.max_samples_per_block + 1);
        let q = u64::from(coefficient).max(1);

        let updated = compute_updated_gasprice(prev, length, q, &spec).unwrap();
        updated >= spec.min_gasprice && updated <= spec.max_gasprice
    }
}
