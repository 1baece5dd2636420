use super::charge::{ChargeRequest, ChargeResponse};
use super::result::{PaymentResult, RecordAck};
use crate::error::Result;
use async_trait::async_trait;

/// Yields a payment-session handle from the external gateway.
///
/// Acquisition is opaque, possibly slow and possibly failing; `None` means
/// the gateway declined to hand out a session without reporting an error.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn acquire_session(&self) -> Result<Option<PaymentSessionBox>>;
}

/// An acquired gateway session capable of issuing a charge.
///
/// Owned exclusively by one checkout orchestrator for its lifetime. The
/// orchestrator imposes no timeout of its own on `charge`.
#[async_trait]
pub trait PaymentSession: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse>;
}

/// Persists a completed payment's record against its booking.
///
/// Invoked at most once per successful charge; a failure is not retried here.
#[async_trait]
pub trait ResultRecorder: Send + Sync {
    async fn record(&self, result: &PaymentResult) -> Result<Option<RecordAck>>;
}

pub type SessionProviderBox = Box<dyn SessionProvider>;
pub type PaymentSessionBox = Box<dyn PaymentSession>;
pub type ResultRecorderBox = Box<dyn ResultRecorder>;
