use super::amount::Amount;
use super::order::OrderId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment methods supported by the gateway. Only card in the default flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    #[default]
    Card,
}

/// How the gateway drives the card flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlowMode {
    #[default]
    Default,
}

/// Card-specific flags sent with a charge request.
///
/// Defaults match the standard flow: escrow off, default mode, point usage off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardOptions {
    pub use_escrow: bool,
    pub flow_mode: FlowMode,
    pub use_card_point: bool,
    pub use_app_card_only: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            use_escrow: false,
            flow_mode: FlowMode::Default,
            use_card_point: false,
            use_app_card_only: false,
        }
    }
}

/// One charge request handed to a payment session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    pub method: PaymentMethod,
    pub amount: Amount,
    pub order_id: OrderId,
    pub order_name: String,
    pub customer_name: String,
    pub card: CardOptions,
}

/// The amount echoed back by the gateway on success.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeAmount {
    pub value: Decimal,
}

/// The only documented success shape of a gateway callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResponse {
    pub order_id: String,
    pub payment_key: String,
    pub amount: ChargeAmount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_method_serializes_uppercase() {
        let json = serde_json::to_string(&PaymentMethod::Card).unwrap();
        assert_eq!(json, r#""CARD""#);
    }

    #[test]
    fn test_card_defaults() {
        let card = CardOptions::default();
        assert!(!card.use_escrow);
        assert_eq!(card.flow_mode, FlowMode::Default);
        assert!(!card.use_card_point);
        assert!(!card.use_app_card_only);
    }

    #[test]
    fn test_charge_response_deserialization() {
        let json = r#"{"orderId": "20240521ab12", "paymentKey": "pk_1", "amount": {"value": "30000"}}"#;
        let response: ChargeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.order_id, "20240521ab12");
        assert_eq!(response.payment_key, "pk_1");
        assert_eq!(response.amount.value, dec!(30000));
    }
}
