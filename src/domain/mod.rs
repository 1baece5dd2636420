//! Domain entities, value objects and the ports the orchestrator drives.

pub mod amount;
pub mod booking;
pub mod charge;
pub mod order;
pub mod ports;
pub mod result;
