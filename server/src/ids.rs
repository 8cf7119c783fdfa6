//! Storage identifier validation.
//!
//! Booking and review records carry `userId`/`serviceId` as plain strings
//! with no referential integrity, so any value arriving from a stored record
//! or a request path must be checked before an `ObjectId` is built from it.

use mongodb::bson::oid::ObjectId;

/// Returns true iff `value` is a canonical 24-character hex ObjectId.
///
/// Parsing alone is not enough: the parsed id must re-serialize to the exact
/// input, which rejects uppercase or otherwise non-canonical spellings that
/// would round-trip to a different string. Never panics.
pub fn is_valid_object_id(value: &str) -> bool {
    match ObjectId::parse_str(value) {
        Ok(oid) => oid.to_hex() == value,
        Err(_) => false,
    }
}

/// Checked constructor used by path-id handlers.
pub fn parse_object_id(value: &str) -> Option<ObjectId> {
    if is_valid_object_id(value) {
        ObjectId::parse_str(value).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("507f1f77bcf86cd799439011", true)]
    #[case("0123456789abcdef01234567", true)]
    // uppercase parses but does not round-trip to the same string
    #[case("507F1F77BCF86CD799439011", false)]
    #[case("507f1f77bcf86cd79943901", false)] // 23 chars
    #[case("507f1f77bcf86cd7994390111", false)] // 25 chars
    #[case("zzzf1f77bcf86cd799439011", false)]
    #[case("u1", false)]
    #[case("", false)]
    fn validates_candidate_ids(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_object_id(input), expected);
    }

    #[test]
    fn parse_returns_id_for_canonical_input() {
        let oid = parse_object_id("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(oid.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn parse_rejects_non_canonical_input() {
        assert!(parse_object_id("507F1F77BCF86CD799439011").is_none());
        assert!(parse_object_id("not-an-id").is_none());
    }
}
