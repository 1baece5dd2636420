use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// A reserved usage of a [`Room`] by a [`Group`].
///
/// The booking may not be persisted yet, in which case `id` is `None` and any
/// payment record derived from it falls back to a booking id of 0.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Option<u64>,
    pub room_id: u64,
    pub group_id: u64,
    /// Labels of the time slots this booking occupies. May be empty.
    #[serde(default)]
    pub using_time: Vec<String>,
}

/// A bookable room with a unit price per time slot.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,
    pub price: Decimal,
}

/// The group a booking belongs to. Its name labels the order at the gateway.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: u64,
    pub name: String,
}

/// The authenticated user driving the checkout.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub nickname: Option<String>,
}

impl UserProfile {
    /// The name sent to the gateway as `customerName`. Empty when unknown.
    pub fn customer_name(&self) -> String {
        self.nickname.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_booking_deserialization_tolerates_missing_fields() {
        let json = r#"{"roomId": 3, "groupId": 7}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();

        assert_eq!(booking.id, None);
        assert_eq!(booking.room_id, 3);
        assert!(booking.using_time.is_empty());
    }

    #[test]
    fn test_room_price_deserialization() {
        let json = r#"{"id": 1, "price": "10000"}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.price, dec!(10000));
    }

    #[test]
    fn test_customer_name_fallback() {
        assert_eq!(UserProfile::default().customer_name(), "");
        let user = UserProfile {
            nickname: Some("minji".to_string()),
        };
        assert_eq!(user.customer_name(), "minji");
    }
}
