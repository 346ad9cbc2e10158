//! Field validation for record submission.
//!
//! A stateless rule checked by the navigation layer before every create
//! or update; the store itself persists anything it is handed.

use crate::store::Record;

/// Minimum length required of every record field, in raw bytes.
pub const MIN_FIELD_LEN: usize = 3;

/// Return true iff name, description, and path all meet the minimum
/// length. Lengths are measured in bytes, not display width.
pub fn is_valid(record: &Record) -> bool {
    record.name.len() >= MIN_FIELD_LEN
        && record.description.len() >= MIN_FIELD_LEN
        && record.path.len() >= MIN_FIELD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description: &str, path: &str) -> Record {
        Record {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_all_fields_at_minimum_are_valid() {
        assert!(is_valid(&record("abc", "def", "ghi")));
    }

    #[test]
    fn test_any_short_field_is_invalid() {
        assert!(!is_valid(&record("ls", "list files", "/bin/ls")));
        assert!(!is_valid(&record("lss", "ab", "/bin/ls")));
        assert!(!is_valid(&record("lss", "list files", "/b")));
        assert!(!is_valid(&record("", "", "")));
    }

    #[test]
    fn test_padding_a_field_keeps_result_true() {
        // Monotonicity: growing any field of a valid record never makes
        // it invalid.
        let mut entry = record("abc", "def", "ghi");
        assert!(is_valid(&entry));
        entry.name.push_str("defghij");
        assert!(is_valid(&entry));
        entry.description.push_str(" with more detail");
        entry.path.push_str("/deeper/path");
        assert!(is_valid(&entry));
    }

    #[test]
    fn test_length_is_measured_in_bytes() {
        // "éé" is two chars but four bytes, which clears the minimum.
        assert!(is_valid(&record("éé", "def", "ghi")));
    }
}
