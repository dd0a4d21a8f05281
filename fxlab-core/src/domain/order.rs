//! Orders — sized, directional instructions subject to simulated execution.

use serde::{Deserialize, Serialize};

use super::Direction;

/// A sized instruction derived from a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub instrument: String,
    pub direction: Direction,
    pub units: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serialization_roundtrip() {
        let order = OrderEvent {
            instrument: "GBPUSD".into(),
            direction: Direction::Long,
            units: 100_000.0,
        };
        let json = serde_json::to_string(&order).unwrap();
        let deser: OrderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deser);
    }
}
