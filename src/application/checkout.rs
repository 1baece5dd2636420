use crate::domain::amount::resolve_amount;
use crate::domain::booking::{Booking, Group, Room, UserProfile};
use crate::domain::charge::{CardOptions, ChargeRequest, PaymentMethod};
use crate::domain::order::OrderId;
use crate::domain::ports::{PaymentSessionBox, ResultRecorderBox, SessionProviderBox};
use crate::domain::result::PaymentResult;
use crate::error::{CheckoutError, Result};
use chrono::Local;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// The read-only entities a checkout is charged against.
///
/// Shared with the upstream owner, which may drop the booking while a charge
/// is in flight; the callback boundary re-reads it before settling.
#[derive(Debug, Default, Clone)]
pub struct CheckoutContext {
    pub booking: Option<Booking>,
    pub room: Option<Room>,
    pub group: Option<Group>,
}

/// Shared handle to the checkout context.
pub type SharedContext = Arc<RwLock<CheckoutContext>>;

/// Builds a [`SharedContext`] from the upstream entities.
pub fn shared_context(
    booking: Option<Booking>,
    room: Option<Room>,
    group: Option<Group>,
) -> SharedContext {
    Arc::new(RwLock::new(CheckoutContext {
        booking,
        room,
        group,
    }))
}

/// Liveness token guarding against stale gateway callbacks.
///
/// The hosting context keeps a clone and disposes it on teardown; the
/// orchestrator checks it before mutating state after any suspension point.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn dispose(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a checkout stands. One attempt runs `SessionReady → Charging` and
/// settles; a later attempt re-enters from `SessionReady` with a fresh order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Uninitialized,
    SessionReady,
    Charging,
    SettledSuccess,
    SettledFailed,
    Aborted,
}

/// Callback toggling the hosting context's loading flag.
pub type LoadingCallback = Box<dyn Fn(bool) + Send + Sync>;

/// The core checkout state machine.
///
/// Owns the gateway session handle and the in-flight result candidate,
/// coordinates the charge across the asynchronous gateway boundary, and hands
/// a successful result to the recorder exactly once. All failures are caught
/// here, logged, and surfaced as typed errors; none propagate uncaught.
pub struct CheckoutOrchestrator {
    provider: SessionProviderBox,
    recorder: ResultRecorderBox,
    context: SharedContext,
    user: Option<UserProfile>,
    liveness: Liveness,
    on_loading: Option<LoadingCallback>,
    session: Option<PaymentSessionBox>,
    state: CheckoutState,
}

impl CheckoutOrchestrator {
    /// Wires the orchestrator to its collaborators and ambient context.
    ///
    /// The session is not acquired here; call [`init`](Self::init) once the
    /// orchestrator becomes active.
    pub fn new(
        provider: SessionProviderBox,
        recorder: ResultRecorderBox,
        context: SharedContext,
        user: Option<UserProfile>,
        liveness: Liveness,
    ) -> Self {
        Self {
            provider,
            recorder,
            context,
            user,
            liveness,
            on_loading: None,
            session: None,
            state: CheckoutState::Uninitialized,
        }
    }

    /// Registers a callback fired when session acquisition completes.
    pub fn on_loading(mut self, callback: LoadingCallback) -> Self {
        self.on_loading = Some(callback);
        self
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Acquires the gateway session, once, when the checkout becomes active.
    ///
    /// On provider failure the orchestrator logs and stays `Uninitialized`;
    /// there is no automatic retry. A charge attempt in that state is refused,
    /// not crashed.
    pub async fn init(&mut self) {
        match self.provider.acquire_session().await {
            Ok(Some(session)) => {
                self.session = Some(session);
                self.state = CheckoutState::SessionReady;
                info!("gateway session acquired");
            }
            Ok(None) => warn!("session provider yielded no session"),
            Err(e) => error!("failed to acquire gateway session: {e}"),
        }
        if let Some(on_loading) = &self.on_loading {
            on_loading(false);
        }
    }

    /// The user-triggered "pay" action: one full checkout attempt.
    ///
    /// Generates a fresh order id, issues the charge, and on a successful
    /// callback records the result against the booking. Returns the recorded
    /// [`PaymentResult`] or the typed reason the attempt settled otherwise.
    pub async fn request_payment(&mut self) -> Result<PaymentResult> {
        let Some(session) = &self.session else {
            warn!("charge requested before a gateway session was acquired");
            return Err(CheckoutError::SessionUnavailable);
        };
        // A prior settled attempt does not block re-entry.
        self.state = CheckoutState::SessionReady;

        let (amount, order_name) = {
            let ctx = self.context.read().await;
            if ctx.booking.is_none() || ctx.room.is_none() {
                warn!("booking or room missing at charge time; refusing to charge");
                return Err(CheckoutError::MissingEntities);
            }
            let amount = resolve_amount(ctx.room.as_ref(), ctx.booking.as_ref());
            let order_name = ctx.group.as_ref().map(|g| g.name.clone()).unwrap_or_default();
            (amount, order_name)
        };

        // Fresh per attempt, generated immediately before the charge.
        let order_id = OrderId::generate(Local::now());
        let request = ChargeRequest {
            method: PaymentMethod::Card,
            amount,
            order_id: order_id.clone(),
            order_name: order_name.clone(),
            customer_name: self
                .user
                .as_ref()
                .map(UserProfile::customer_name)
                .unwrap_or_default(),
            card: CardOptions::default(),
        };

        self.state = CheckoutState::Charging;
        info!(order_id = %order_id, value = %request.amount.value, "charge requested");

        let response = match session.charge(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!(order_id = %order_id, "charge failed: {e}");
                if self.liveness.is_active() {
                    self.state = CheckoutState::SettledFailed;
                }
                let reason = match e {
                    CheckoutError::GatewayRejected(reason) => reason,
                    other => other.to_string(),
                };
                return Err(CheckoutError::GatewayRejected(reason));
            }
        };

        // Callback boundary: a disposed checkout must not settle or record.
        if !self.liveness.is_active() {
            warn!(order_id = %response.order_id, "late gateway callback on a disposed checkout; discarded");
            return Err(CheckoutError::Stale);
        }

        let booking = self.context.read().await.booking.clone();
        let Some(booking) = booking else {
            warn!(order_id = %response.order_id, "booking vanished before the gateway callback; result dropped");
            self.state = CheckoutState::Aborted;
            return Err(CheckoutError::OrphanedResult);
        };

        // The gateway-reported amount is authoritative, not the preview.
        let result = PaymentResult {
            order_id: response.order_id,
            payment_key: response.payment_key,
            amount: response.amount.value,
            order_name,
            room_id: booking.room_id,
            group_id: booking.group_id,
            booking_id: booking.id.unwrap_or(0),
            use_point: 0,
        };
        self.state = CheckoutState::SettledSuccess;

        match self.recorder.record(&result).await {
            Ok(_) => info!(order_id = %result.order_id, "payment result recorded"),
            Err(e) => {
                // The charge already settled at the gateway. No compensating
                // refund exists in this core; reconciliation happens elsewhere.
                error!(order_id = %result.order_id, "failed to record payment result: {e}");
            }
        }

        Ok(result)
    }
}
