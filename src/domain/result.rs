use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The record persisted against a booking once the gateway confirms a charge.
///
/// Built only after a successful gateway callback with the originating
/// booking still present, handed to the recorder exactly once, and never
/// mutated after construction. `amount` is the gateway-reported value, not
/// the locally computed preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub order_id: String,
    pub payment_key: String,
    pub amount: Decimal,
    pub order_name: String,
    pub room_id: u64,
    pub group_id: u64,
    /// 0 when the booking was not persisted yet.
    pub booking_id: u64,
    pub use_point: u32,
}

/// Opaque acknowledgment from the result recorder. Its absence is treated as
/// success-or-silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordAck;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = PaymentResult {
            order_id: "20240521ab12".to_string(),
            payment_key: "pk_1".to_string(),
            amount: dec!(30000),
            order_name: "Team Sync".to_string(),
            room_id: 3,
            group_id: 7,
            booking_id: 11,
            use_point: 0,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""orderId":"20240521ab12""#));
        assert!(json.contains(r#""paymentKey":"pk_1""#));
        assert!(json.contains(r#""bookingId":11"#));
        assert!(json.contains(r#""usePoint":0"#));
    }
}
