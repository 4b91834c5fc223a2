//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "bank:cache";

/// Key for a profile fetched from `profile-app`.
#[must_use]
pub fn profile_by_id(id: i64) -> String {
    format!("{}:profile:id:{}", CACHE_PREFIX, id)
}

/// Key for bank details fetched from `public-info-app`.
#[must_use]
pub fn bank_details_by_id(id: i64) -> String {
    format!("{}:bank-details:id:{}", CACHE_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_key() {
        assert_eq!(profile_by_id(7), "bank:cache:profile:id:7");
    }

    #[test]
    fn test_bank_details_key() {
        assert_eq!(bank_details_by_id(42), "bank:cache:bank-details:id:42");
    }
}
