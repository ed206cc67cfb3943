use chrono::Utc;

use crate::entities::RecordId;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl RecordId {
    /// Current epoch milliseconds in base-36, followed by 64 bits of
    /// randomness in base-36. Two calls within the same millisecond still
    /// differ in the random half, so collisions are vanishingly unlikely.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        let entropy: u64 = rand::random();
        RecordId(format!(
            "{}{}",
            to_base36(millis),
            to_base36(entropy as u128)
        ))
    }
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut reversed = String::new();
    while n > 0 {
        reversed.push(BASE36_DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    reversed.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn base36_round_trip_examples() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn ten_thousand_ids_have_no_duplicates() {
        let ids: HashSet<RecordId> = (0..10_000).map(|_| RecordId::generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
