//! Inbound interfaces driving checkouts.

pub mod csv;
