use safe_arith::SafeArith;
use types::*;

/// Returns the members of `committee` whose bit is set in `bitlist`, in committee order.
pub fn get_attesting_indices<E: EthSpec>(
    committee: &[usize],
    bitlist: &BitList<E::MaxValidatorsPerCommittee>,
) -> Result<Vec<usize>, BeaconStateError> {
    if bitlist.len() != committee.len() {
        return Err(BeaconStateError::InvalidBitfield);
    }

    Ok(committee
        .iter()
        .enumerate()
        .filter_map(|(i, validator_index)| match bitlist.get(i) {
            Ok(true) => Some(*validator_index),
            _ => None,
        })
        .collect())
}

/// Returns the summed effective balance of the members of `committee` who voted in `votes`.
///
/// Unlike `BeaconState::get_total_balance` this is not floored at one increment, so a vector with
/// no set bits is worth exactly zero.
pub fn get_attested_balance<E: EthSpec>(
    state: &BeaconState<E>,
    committee: &[usize],
    votes: &BitList<E::MaxValidatorsPerCommittee>,
) -> Result<u64, BeaconStateError> {
    get_attesting_indices::<E>(committee, votes)?
        .into_iter()
        .try_fold(0_u64, |acc, validator_index| {
            Ok(acc.safe_add(state.get_effective_balance(validator_index)?)?)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    type E = MinimalEthSpec;

    fn bits(set: &[bool]) -> BitList<<E as EthSpec>::MaxValidatorsPerCommittee> {
        let mut bitlist = BitList::with_capacity(set.len()).unwrap();
        for (i, bit) in set.iter().enumerate() {
            bitlist.set(i, *bit).unwrap();
        }
        bitlist
    }

    #[test]
    fn selects_members_in_committee_order() {
        let committee = vec![7, 3, 9, 1];
        let indices =
            get_attesting_indices::<E>(&committee, &bits(&[false, true, false, true])).unwrap();
        assert_eq!(indices, vec![3, 1]);
    }

    #[test]
    fn rejects_wrong_length() {
        let committee = vec![7, 3, 9];
        assert_eq!(
            get_attesting_indices::<E>(&committee, &bits(&[true, true])),
            Err(BeaconStateError::InvalidBitfield)
        );
    }
}
