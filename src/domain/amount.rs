use super::booking::{Booking, Room};
use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The currencies the gateway accepts. Only KRW in the current scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Krw,
}

/// A monetary value quoted to the gateway.
///
/// Immutable once computed for a checkout attempt. Values are integer minor
/// units (KRW carries no fraction) and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: Currency,
    pub value: Decimal,
}

impl Amount {
    pub fn new(currency: Currency, value: Decimal) -> Result<Self, CheckoutError> {
        if value < Decimal::ZERO {
            return Err(CheckoutError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(Self { currency, value })
    }

    pub fn krw(value: Decimal) -> Self {
        Self {
            currency: Currency::Krw,
            value,
        }
    }
}

/// Derives the preview charge amount from the booking entities.
///
/// Pure and total: a missing room degrades to price 0 and a missing booking
/// (or empty slot list) to 0 slots, so the result is always a valid,
/// non-negative amount. Whether a zero amount may actually be charged is
/// decided by the orchestrator, not here.
pub fn resolve_amount(room: Option<&Room>, booking: Option<&Booking>) -> Amount {
    let price = room.map_or(Decimal::ZERO, |r| r.price);
    let slots = booking.map_or(0, |b| b.using_time.len()) as u64;
    let value = (price * Decimal::from(slots)).max(Decimal::ZERO);
    Amount::krw(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn room(price: Decimal) -> Room {
        Room { id: 1, price }
    }

    fn booking(slots: usize) -> Booking {
        Booking {
            id: Some(1),
            room_id: 1,
            group_id: 1,
            using_time: (0..slots).map(|i| format!("{:02}:00", 9 + i)).collect(),
        }
    }

    #[test]
    fn test_missing_room_resolves_to_zero() {
        let amount = resolve_amount(None, Some(&booking(3)));
        assert_eq!(amount.value, Decimal::ZERO);
        assert_eq!(amount.currency, Currency::Krw);
    }

    #[test]
    fn test_missing_booking_resolves_to_zero() {
        let amount = resolve_amount(Some(&room(dec!(10000))), None);
        assert_eq!(amount.value, Decimal::ZERO);
    }

    #[test]
    fn test_empty_slot_list_resolves_to_zero() {
        let amount = resolve_amount(Some(&room(dec!(10000))), Some(&booking(0)));
        assert_eq!(amount.value, Decimal::ZERO);
    }

    #[test]
    fn test_price_times_slots() {
        let amount = resolve_amount(Some(&room(dec!(10000))), Some(&booking(3)));
        assert_eq!(amount.value, dec!(30000));
        assert!(amount.value.is_integer());
    }

    #[test]
    fn test_negative_price_clamps_to_zero() {
        let amount = resolve_amount(Some(&room(dec!(-500))), Some(&booking(2)));
        assert_eq!(amount.value, Decimal::ZERO);
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(Amount::new(Currency::Krw, dec!(-1)).is_err());
        assert!(Amount::new(Currency::Krw, Decimal::ZERO).is_ok());
    }
}
