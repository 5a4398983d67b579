// Prefixed id generation for manager-owned records.

use chrono::Utc;
use uuid::Uuid;

/// Build an id of the form `{prefix}-{unix_millis}-{8 hex chars}`.
///
/// The timestamp keeps ids roughly sortable by creation time; the random
/// suffix keeps two ids minted in the same millisecond distinct.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let entropy = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{millis}-{}", &entropy[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_the_prefix_and_a_millisecond_timestamp() {
        let id = generate_id("version");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "version");
        assert!(parts[1].parse::<i64>().expect("timestamp should parse") > 0);
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_are_distinct_within_one_millisecond() {
        let first = generate_id("log");
        let second = generate_id("log");
        assert_ne!(first, second);
    }
}
