use crate::application::checkout::{Liveness, SharedContext};
use crate::domain::charge::{ChargeAmount, ChargeRequest, ChargeResponse};
use crate::domain::ports::{
    PaymentSession, PaymentSessionBox, ResultRecorder, SessionProvider,
};
use crate::domain::result::{PaymentResult, RecordAck};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};

/// How a [`ScriptedSession`] answers a charge.
pub enum ChargeScript {
    /// Approve with a payment key, echoing the requested order id and amount.
    Echo,
    /// Approve with this exact canned response.
    Approve(ChargeResponse),
    /// Reject with this reason.
    Reject(String),
    /// Reject the first charge with this reason, echo afterwards.
    RejectOnce(String),
}

/// An in-memory payment session with scripted behavior.
///
/// Besides answering charges it can simulate the two mid-flight hazards the
/// orchestrator must survive: the booking vanishing from the shared context,
/// and the hosting context tearing the checkout down.
pub struct ScriptedSession {
    script: ChargeScript,
    charges: Arc<AtomicUsize>,
    vanish_booking: Option<SharedContext>,
    dispose: Option<Liveness>,
}

impl ScriptedSession {
    pub fn new(script: ChargeScript) -> Self {
        Self {
            script,
            charges: Arc::new(AtomicUsize::new(0)),
            vanish_booking: None,
            dispose: None,
        }
    }

    /// Clears the booking from `context` between charge start and callback.
    pub fn vanishing_booking(mut self, context: SharedContext) -> Self {
        self.vanish_booking = Some(context);
        self
    }

    /// Disposes `liveness` between charge start and callback.
    pub fn disposing(mut self, liveness: Liveness) -> Self {
        self.dispose = Some(liveness);
        self
    }

    /// Shared counter of charge calls seen by this session.
    pub fn charge_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.charges)
    }
}

#[async_trait]
impl PaymentSession for ScriptedSession {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse> {
        let call = self.charges.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(context) = &self.vanish_booking {
            context.write().await.booking = None;
        }
        if let Some(liveness) = &self.dispose {
            liveness.dispose();
        }

        match &self.script {
            ChargeScript::Reject(reason) => Err(CheckoutError::GatewayRejected(reason.clone())),
            ChargeScript::RejectOnce(reason) if call == 1 => {
                Err(CheckoutError::GatewayRejected(reason.clone()))
            }
            ChargeScript::Approve(response) => Ok(response.clone()),
            ChargeScript::Echo | ChargeScript::RejectOnce(_) => Ok(ChargeResponse {
                order_id: request.order_id.to_string(),
                payment_key: format!("pk_{call}"),
                amount: ChargeAmount {
                    value: request.amount.value,
                },
            }),
        }
    }
}

/// A provider that hands out a prepared session, once.
pub struct StaticProvider {
    session: Mutex<Option<PaymentSessionBox>>,
}

impl StaticProvider {
    pub fn new(session: PaymentSessionBox) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticProvider {
    async fn acquire_session(&self) -> Result<Option<PaymentSessionBox>> {
        Ok(self.session.lock().await.take())
    }
}

/// A provider that never yields a session.
#[derive(Default)]
pub struct UnavailableProvider;

#[async_trait]
impl SessionProvider for UnavailableProvider {
    async fn acquire_session(&self) -> Result<Option<PaymentSessionBox>> {
        Ok(None)
    }
}

/// A provider whose acquisition fails outright.
#[derive(Default)]
pub struct FailingProvider;

#[async_trait]
impl SessionProvider for FailingProvider {
    async fn acquire_session(&self) -> Result<Option<PaymentSessionBox>> {
        Err(CheckoutError::SessionUnavailable)
    }
}

/// A thread-safe in-memory result recorder.
///
/// Collects every recorded [`PaymentResult`] for inspection; `Clone` shares
/// the underlying storage, so tests keep a handle while the orchestrator owns
/// the boxed port.
#[derive(Default, Clone)]
pub struct MemoryRecorder {
    results: Arc<RwLock<Vec<PaymentResult>>>,
    fail: bool,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `record` call always fails.
    pub fn failing() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    pub async fn results(&self) -> Vec<PaymentResult> {
        self.results.read().await.clone()
    }

    pub async fn record_count(&self) -> usize {
        self.results.read().await.len()
    }
}

#[async_trait]
impl ResultRecorder for MemoryRecorder {
    async fn record(&self, result: &PaymentResult) -> Result<Option<RecordAck>> {
        if self.fail {
            return Err(CheckoutError::RecorderFailure(
                "persistence backend unreachable".to_string(),
            ));
        }
        self.results.write().await.push(result.clone());
        Ok(Some(RecordAck))
    }
}
