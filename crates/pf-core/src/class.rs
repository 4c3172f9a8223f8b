//! Passenger class enum.

use std::fmt;

/// The two passenger classes distinguished by the corridor model.
///
/// Both classes pass through the same screening zone and walking segments
/// and share one FIFO entrance queue; the class exists for arrival-rate
/// configuration and per-class reporting, not for priority.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PassengerClass {
    /// Carries an object through the screening belt.
    WithLuggage,
    /// Travels light; identical corridor treatment, reported separately.
    WithoutLuggage,
}

impl PassengerClass {
    /// All classes, in a fixed order (used for per-class reporting).
    pub const ALL: [PassengerClass; 2] =
        [PassengerClass::WithLuggage, PassengerClass::WithoutLuggage];

    /// Stable string form used in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            PassengerClass::WithLuggage => "with-luggage",
            PassengerClass::WithoutLuggage => "without-luggage",
        }
    }
}

impl fmt::Display for PassengerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
