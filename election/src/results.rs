//! Winner selection.

use crate::candidate::Candidate;
use crate::error::ElectionError;

/// The candidate with the most votes.
///
/// Scans in ascending id order and only replaces the leader on a strictly
/// greater count, so ties go to the lowest id. With no votes at all the
/// first candidate leads.
pub fn leading_candidate(candidates: &[Candidate]) -> Result<&Candidate, ElectionError> {
    let mut iter = candidates.iter();
    let mut leader = iter.next().ok_or(ElectionError::NoCandidates)?;
    for candidate in iter {
        if candidate.vote_count > leader.vote_count {
            leader = candidate;
        }
    }
    Ok(leader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use election_types::FundAmount;

    fn candidates(votes: &[u64]) -> Vec<Candidate> {
        votes
            .iter()
            .enumerate()
            .map(|(i, &v)| Candidate {
                id: i as u64 + 1,
                name: format!("c{}", i + 1),
                vote_count: v,
                funds_received: FundAmount::ZERO,
            })
            .collect()
    }

    #[test]
    fn empty_registry_has_no_winner() {
        assert!(matches!(
            leading_candidate(&[]),
            Err(ElectionError::NoCandidates)
        ));
    }

    #[test]
    fn highest_count_wins() {
        let cs = candidates(&[1, 4, 2]);
        assert_eq!(leading_candidate(&cs).unwrap().id, 2);
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        let cs = candidates(&[0, 3, 1, 3]);
        assert_eq!(leading_candidate(&cs).unwrap().id, 2);
    }

    #[test]
    fn no_votes_yields_first_candidate() {
        let cs = candidates(&[0, 0]);
        assert_eq!(leading_candidate(&cs).unwrap().id, 1);
    }
}
