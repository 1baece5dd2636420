use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum order-id length the gateway accepts.
pub const MAX_ORDER_ID_LEN: usize = 64;

/// Client-generated identifier correlating one checkout attempt with the
/// gateway's records.
///
/// Format: `YYYYMMDD` local-date prefix followed by a random UUID-derived
/// suffix. Generated exactly once per charge attempt and never reused;
/// uniqueness is probabilistic, not enforced against the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a fresh order id partitioned by the attempt's local date.
    ///
    /// The date prefix is never truncated; the random suffix is cut to keep
    /// the whole id within [`MAX_ORDER_ID_LEN`].
    pub fn generate(now: DateTime<Local>) -> Self {
        let mut id = now.format("%Y%m%d").to_string();
        let suffix = Uuid::new_v4().simple().to_string();
        let budget = MAX_ORDER_ID_LEN.saturating_sub(id.len());
        id.push_str(&suffix[..suffix.len().min(budget)]);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_prefix() {
        let now = Local.with_ymd_and_hms(2024, 5, 21, 10, 0, 0).unwrap();
        let id = OrderId::generate(now);
        assert!(id.as_str().starts_with("20240521"));
    }

    #[test]
    fn test_prefix_is_zero_padded() {
        let now = Local.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let id = OrderId::generate(now);
        assert!(id.as_str().starts_with("20240102"));
    }

    #[test]
    fn test_length_bound() {
        let id = OrderId::generate(Local::now());
        assert!(id.as_str().len() <= MAX_ORDER_ID_LEN);
    }

    #[test]
    fn test_consecutive_ids_differ() {
        let now = Local::now();
        assert_ne!(OrderId::generate(now), OrderId::generate(now));
    }
}
