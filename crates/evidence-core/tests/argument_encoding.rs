//! Property tests for contract argument encoding.
//!
//! The contract parses `AddEvidence` arguments positionally, so for every
//! possible submission the tuple must have ten slots, carry string fields
//! byte-for-byte, and render the numeric and boolean slots in the exact
//! forms the contract's parsers accept.

use evidence_core::transaction::{render_bool, render_file_size};
use evidence_core::{EvidenceSubmission, Operation, TransactionRequest};
use proptest::prelude::*;

fn arb_submission() -> impl Strategy<Value = EvidenceSubmission> {
    (
        (any::<String>(), any::<String>(), any::<String>(), any::<String>()),
        (any::<String>(), any::<String>(), any::<String>()),
        any::<u64>(),
        (any::<String>(), any::<String>()),
        any::<bool>(),
    )
        .prop_map(
            |(
                (name, description, case_id, collected_by),
                (collection_timestamp, location, cid),
                file_size,
                (file_type, checksum),
                password_protected,
            )| EvidenceSubmission {
                name,
                description,
                case_id,
                collected_by,
                collection_timestamp,
                location,
                cid,
                file_size,
                file_type,
                checksum,
                password_protected,
            },
        )
}

proptest! {
    #[test]
    fn add_evidence_tuple_is_positional(sub in arb_submission()) {
        let req = TransactionRequest::add_evidence(&sub);
        prop_assert_eq!(req.operation, Operation::AddEvidence);
        prop_assert_eq!(req.args.len(), 10);
        prop_assert_eq!(&req.args[0], &sub.name);
        prop_assert_eq!(&req.args[1], &sub.description);
        prop_assert_eq!(&req.args[2], &sub.case_id);
        prop_assert_eq!(&req.args[3], &sub.collected_by);
        prop_assert_eq!(&req.args[4], &sub.collection_timestamp);
        prop_assert_eq!(&req.args[5], &sub.location);
        prop_assert_eq!(&req.args[6], &sub.cid);
        prop_assert_eq!(&req.args[8], &sub.checksum);
    }

    #[test]
    fn file_size_is_canonical_decimal(size in any::<u64>()) {
        let rendered = render_file_size(size);
        prop_assert!(rendered.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(rendered == "0" || !rendered.starts_with('0'));
        prop_assert_eq!(rendered.parse::<u64>().unwrap(), size);
    }

    #[test]
    fn boolean_slot_is_lowercase_token(flag in any::<bool>()) {
        let rendered = render_bool(flag);
        prop_assert!(rendered == "true" || rendered == "false");
        prop_assert_eq!(rendered.parse::<bool>().unwrap(), flag);
    }

    #[test]
    fn update_status_carries_id_then_status(id in ".*", status in ".*") {
        let req = TransactionRequest::update_status(&id, &status);
        prop_assert_eq!(req.args, vec![id, status]);
    }
}
