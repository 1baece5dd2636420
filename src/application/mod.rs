//! Application layer containing the core checkout orchestration.
//!
//! This module defines the `CheckoutOrchestrator`, the state machine that
//! owns the gateway session, triggers the charge and hands the settled result
//! to the recorder. It awaits each boundary in turn, so order-id generation,
//! charge, result construction and recording stay strictly sequential.

pub mod checkout;
