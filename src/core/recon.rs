use thiserror::Error;

use super::parser::AddressSet;
use super::validator::is_valid_ip;

/// Outcome of one revocation request against an allow-list.
///
/// Invariants: `matched` and `retained` are disjoint and their union is
/// `original`. An empty `matched` is a valid no-op outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub original: AddressSet,
    pub matched: AddressSet,
    pub retained: AddressSet,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("revocation list is empty")]
    EmptyRequest,

    /// Every offending entry, lexicographically sorted. Validation is
    /// exhaustive so the operator can fix the whole batch in one pass.
    #[error("invalid addresses: {}", .0.join(", "))]
    InvalidAddresses(Vec<String>),
}

/// Validate the request, then take the set difference.
/// Fails before any side effect is possible; callers only log or render
/// on `Ok`.
pub fn reconcile(
    original: &AddressSet,
    requested: &AddressSet,
) -> Result<Reconciliation, ReconcileError> {
    if requested.is_empty() {
        return Err(ReconcileError::EmptyRequest);
    }

    let invalid: Vec<String> = requested
        .iter()
        .filter(|entry| !is_valid_ip(entry))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(ReconcileError::InvalidAddresses(invalid));
    }

    let matched: AddressSet = original.intersection(requested).cloned().collect();
    let retained: AddressSet = original.difference(&matched).cloned().collect();

    Ok(Reconciliation {
        original: original.clone(),
        matched,
        retained,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse, serialize, Delimiter};

    fn set(items: &[&str]) -> AddressSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_property() {
        let original = set(&["1.1.1.1", "2.2.2.2", "3.3.3.3", "4.4.4.4"]);
        let requested = set(&["2.2.2.2", "4.4.4.4", "8.8.8.8"]);
        let recon = reconcile(&original, &requested).unwrap();

        let union: AddressSet = recon.retained.union(&recon.matched).cloned().collect();
        assert_eq!(union, original);
        assert!(recon.retained.intersection(&recon.matched).next().is_none());
    }

    #[test]
    fn test_empty_request_rejected() {
        let original = set(&["1.1.1.1"]);
        assert_eq!(
            reconcile(&original, &AddressSet::new()),
            Err(ReconcileError::EmptyRequest)
        );
    }

    #[test]
    fn test_invalid_address_rejected() {
        let original = set(&["10.0.0.1"]);
        let requested = set(&["not-an-ip"]);
        assert_eq!(
            reconcile(&original, &requested),
            Err(ReconcileError::InvalidAddresses(vec!["not-an-ip".to_string()]))
        );
    }

    #[test]
    fn test_invalid_addresses_listed_exhaustively() {
        let original = set(&["10.0.0.1"]);
        let requested = set(&["10.0.0.1", "abc", "10.0.0.999", "zzz"]);
        let err = reconcile(&original, &requested).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::InvalidAddresses(vec![
                "10.0.0.999".to_string(),
                "abc".to_string(),
                "zzz".to_string(),
            ])
        );
    }

    #[test]
    fn test_no_match_is_valid_result() {
        let original = set(&["1.1.1.1", "2.2.2.2"]);
        let requested = set(&["9.9.9.9"]);
        let recon = reconcile(&original, &requested).unwrap();
        assert!(recon.matched.is_empty());
        assert_eq!(recon.retained, original);
    }

    #[test]
    fn test_end_to_end_partial_match() {
        let original = set(&["1.1.1.1", "2.2.2.2", "3.3.3.3"]);
        let requested = set(&["2.2.2.2", "9.9.9.9"]);
        let recon = reconcile(&original, &requested).unwrap();

        assert_eq!(recon.matched, set(&["2.2.2.2"]));
        assert_eq!(recon.retained, set(&["1.1.1.1", "3.3.3.3"]));
        assert_eq!(serialize(&recon.retained), "1.1.1.1\n3.3.3.3");
    }

    #[test]
    fn test_end_to_end_full_match_from_padded_input() {
        let original = set(&["10.0.0.1"]);
        let requested = parse(" 10.0.0.1 ,10.0.0.1", Delimiter::Comma);
        assert_eq!(requested, set(&["10.0.0.1"]));

        let recon = reconcile(&original, &requested).unwrap();
        assert_eq!(recon.matched, set(&["10.0.0.1"]));
        assert!(recon.retained.is_empty());
        assert_eq!(serialize(&recon.retained), "");
    }

    #[test]
    fn test_retained_round_trips_through_parser() {
        let original = set(&["1.1.1.1", "2.2.2.2", "3.3.3.3"]);
        let requested = set(&["2.2.2.2"]);
        let recon = reconcile(&original, &requested).unwrap();
        let reparsed = parse(&serialize(&recon.retained), Delimiter::Newline);
        assert_eq!(reparsed, recon.retained);
    }
}
