use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One checkout to run from the demo driver: which group books how many
/// slots of a room at which unit price, and who pays.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CheckoutScenario {
    pub group_name: String,
    pub room_price: Decimal,
    pub slots: usize,
    pub customer: String,
}

/// Reads checkout scenarios from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<CheckoutScenario>`,
/// trimming whitespace and tolerating flexible record lengths.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    /// Creates a new `ScenarioReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes scenarios.
    pub fn scenarios(self) -> impl Iterator<Item = Result<CheckoutScenario>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CheckoutError::from))
    }
}
