//! Net position tracking with average-entry accounting.

use serde::{Deserialize, Serialize};

/// Signed net position in one instrument.
///
/// `units > 0` is long, `units < 0` is short, `units == 0` is flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub units: f64,
    pub avg_price: f64,
}

impl Position {
    pub fn is_flat(&self) -> bool {
        self.units == 0.0
    }

    /// Applies a signed fill at `price` and returns the realized P&L.
    ///
    /// Same-direction fills extend the position at a weighted average
    /// entry price and realize nothing. Opposite-direction fills close
    /// against the average entry first; a fill larger than the position
    /// flips it, with the remainder opened at `price`.
    pub fn apply(&mut self, delta: f64, price: f64) -> f64 {
        if delta == 0.0 {
            return 0.0;
        }
        if self.units == 0.0 || (self.units > 0.0) == (delta > 0.0) {
            let new_units = self.units + delta;
            self.avg_price =
                (self.avg_price * self.units.abs() + price * delta.abs()) / new_units.abs();
            self.units = new_units;
            return 0.0;
        }

        let closed = delta.abs().min(self.units.abs());
        let side = if self.units > 0.0 { 1.0 } else { -1.0 };
        let realized = (price - self.avg_price) * closed * side;

        let leftover = self.units + delta;
        if leftover == 0.0 {
            self.units = 0.0;
            self.avg_price = 0.0;
        } else if (leftover > 0.0) == (self.units > 0.0) {
            // Partial close: same side remains at the original entry.
            self.units = leftover;
        } else {
            // Flip: the remainder is a fresh position at the fill price.
            self.units = leftover;
            self.avg_price = price;
        }
        realized
    }

    /// Mark-to-market P&L against the current mid.
    pub fn unrealized(&self, mid: f64) -> f64 {
        (mid - self.avg_price) * self.units
    }
}
