use proptest::prelude::*;

use election_types::{FundAmount, Identity, Timestamp};

proptest! {
    /// has_expired flips exactly at start + duration.
    #[test]
    fn has_expired_boundary(start in 0u64..1_000_000_000, duration in 0u64..1_000_000) {
        let t = Timestamp::new(start);
        let boundary = Timestamp::new(start + duration);
        prop_assert!(t.has_expired(duration, boundary));
        if duration > 0 {
            prop_assert!(!t.has_expired(duration, Timestamp::new(start + duration - 1)));
        }
    }

    /// FundAmount checked_add agrees with u128 checked_add.
    #[test]
    fn fund_amount_checked_add(a in any::<u128>(), b in any::<u128>()) {
        let sum = FundAmount::new(a).checked_add(FundAmount::new(b));
        prop_assert_eq!(sum.map(|s| s.raw()), a.checked_add(b));
    }

    /// Any non-blank identity parses to its trimmed form.
    #[test]
    fn identity_parse_trims(raw in "[a-z0-9_]{1,32}") {
        let padded = format!("  {raw}\t");
        let id = Identity::parse(&padded).unwrap();
        prop_assert_eq!(id.as_str(), raw.as_str());
    }
}
