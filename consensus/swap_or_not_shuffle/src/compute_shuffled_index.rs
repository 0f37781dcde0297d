use ethereum_hashing::hash;
use std::cmp::max;

/// Return `p(index)` in a pseudorandom permutation `p` of `0...list_size-1` with ``seed`` as entropy.
///
/// Utilizes 'swap or not' shuffling found in
/// https://link.springer.com/content/pdf/10.1007%2F978-3-642-32009-5_1.pdf
/// See the 'generalized domain' algorithm on page 3.
///
/// Note: this function is significantly slower than a whole-list shuffle, but is efficient when
/// only a few positions of a large list are required.
///
/// Returns `None` under any of the following conditions:
///  - `list_size == 0`
///  - `index >= list_size`
///  - `list_size > 2**24`
///  - `list_size > usize::MAX / 2`
pub fn compute_shuffled_index(
    index: usize,
    list_size: usize,
    seed: &[u8],
    shuffle_round_count: u8,
) -> Option<usize> {
    if list_size == 0
        || index >= list_size
        || list_size > usize::MAX / 2
        || list_size > 2_usize.pow(24)
    {
        return None;
    }

    let mut index = index;
    for round in 0..shuffle_round_count {
        let pivot = bytes_to_int64(&hash_with_round(seed, round)[..]) as usize % list_size;
        index = do_round(seed, index, pivot, round, list_size);
    }
    Some(index)
}

fn do_round(seed: &[u8], index: usize, pivot: usize, round: u8, list_size: usize) -> usize {
    let flip = (pivot + (list_size - index)) % list_size;
    let position = max(index, flip);
    let source = hash_with_round_and_position(seed, round, position);
    let byte = source[(position % 256) / 8];
    let bit = (byte >> (position % 8)) % 2;
    if bit == 1 {
        flip
    } else {
        index
    }
}

fn hash_with_round_and_position(seed: &[u8], round: u8, position: usize) -> Vec<u8> {
    let mut seed = seed.to_vec();
    seed.push(round);
    // Intentionally truncate to the four bytes the permutation consumes.
    seed.extend_from_slice(&((position / 256) as u32).to_le_bytes());
    hash(&seed[..])
}

fn hash_with_round(seed: &[u8], round: u8) -> Vec<u8> {
    let mut seed = seed.to_vec();
    seed.push(round);
    hash(&seed[..])
}

fn bytes_to_int64(slice: &[u8]) -> u64 {
    let mut bytes = [0; 8];
    bytes.copy_from_slice(&slice[0..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::H256 as Hash256;
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;

    #[test]
    fn returns_none_for_zero_length_list() {
        assert_eq!(None, compute_shuffled_index(100, 0, &[42, 42], 90));
    }

    #[test]
    fn returns_none_for_out_of_bounds_index() {
        assert_eq!(None, compute_shuffled_index(100, 100, &[42, 42], 90));
    }

    #[test]
    fn returns_none_for_too_large_list() {
        assert_eq!(
            None,
            compute_shuffled_index(100, usize::MAX / 2, &[42, 42], 90)
        );
    }

    #[test]
    fn singleton_list_is_identity() {
        assert_eq!(Some(0), compute_shuffled_index(0, 1, &[1; 32], 90));
    }

    #[test]
    fn zero_rounds_is_identity() {
        for i in 0..16 {
            assert_eq!(Some(i), compute_shuffled_index(i, 16, &[7; 32], 0));
        }
    }

    #[test]
    fn is_a_permutation() {
        let seed = Hash256::repeat_byte(3);
        for list_size in [1, 2, 3, 17, 256, 300] {
            let shuffled: HashSet<usize> = (0..list_size)
                .map(|i| compute_shuffled_index(i, list_size, seed.as_bytes(), 10).unwrap())
                .collect();
            assert_eq!(shuffled.len(), list_size);
            assert!(shuffled.iter().all(|i| *i < list_size));
        }
    }

    #[test]
    fn different_seeds_give_different_permutations() {
        let permutation = |byte: u8| -> Vec<usize> {
            (0..64)
                .map(|i| compute_shuffled_index(i, 64, &[byte; 32], 10).unwrap())
                .collect()
        };
        assert_ne!(permutation(1), permutation(2));
    }

    #[quickcheck]
    fn is_deterministic(index: u16, list_size: u16, seed: u64) -> bool {
        let list_size = list_size as usize + 1;
        let index = index as usize % list_size;
        let seed = seed.to_le_bytes();
        compute_shuffled_index(index, list_size, &seed, 10)
            == compute_shuffled_index(index, list_size, &seed, 10)
    }
}
