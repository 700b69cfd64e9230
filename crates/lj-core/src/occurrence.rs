//! Conversion between the backend time window and the editable occurrence.
//!
//! The backend stores a join's temporal condition as two hour offsets around
//! the source event, one before and one after. The editor works with a single
//! `(direction, magnitude, unit)` triple where whole days are shown as days.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Quantity, TimeScale};

const HOURS_PER_DAY: f64 = 24.0;

/// The backend's dual-offset time window, in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Hours the target event may precede the source event.
    #[serde(rename = "timeRangeStartBeforeHours", default)]
    pub start_before_hours: Quantity,
    /// Hours the target event may follow the source event.
    #[serde(rename = "timeRangeEndAfterHours", default)]
    pub end_after_hours: Quantity,
}

impl TimeWindow {
    /// Builds a window from raw hour counts, clamping each into range.
    #[must_use]
    pub const fn new(start_before_hours: f64, end_after_hours: f64) -> Self {
        Self {
            start_before_hours: Quantity::clamped(start_before_hours),
            end_after_hours: Quantity::clamped(end_after_hours),
        }
    }
}

/// How an occurrence is written back into a [`TimeWindow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowEncoding {
    /// The offset matching the direction carries the hours.
    #[default]
    Corrected,
    /// Historical wire behaviour: both offsets are always written as 0.
    Legacy,
}

/// A join's temporal condition as presented to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOccurrence {
    pub occurrence: Direction,
    pub time_unit: Quantity,
    pub time_scale: TimeScale,
}

impl Default for EventOccurrence {
    /// One day before the source event.
    fn default() -> Self {
        Self {
            occurrence: Direction::Before,
            time_unit: Quantity::clamped(1.0),
            time_scale: TimeScale::Days,
        }
    }
}

impl EventOccurrence {
    #[must_use]
    pub const fn new(occurrence: Direction, time_unit: f64, time_scale: TimeScale) -> Self {
        Self {
            occurrence,
            time_unit: Quantity::clamped(time_unit),
            time_scale,
        }
    }

    /// Decodes a backend window.
    ///
    /// The larger offset wins the direction; ties (including the empty
    /// window) resolve to [`Direction::After`]. A non-zero magnitude that is
    /// a whole number of days is expressed in days.
    #[must_use]
    pub const fn from_window(window: TimeWindow) -> Self {
        let before = window.start_before_hours.value();
        let after = window.end_after_hours.value();
        let (occurrence, hours) = if before > after {
            (Direction::Before, before)
        } else {
            (Direction::After, after)
        };

        if hours > 0.0 && hours % HOURS_PER_DAY == 0.0 {
            Self::new(occurrence, hours / HOURS_PER_DAY, TimeScale::Days)
        } else {
            Self::new(occurrence, hours, TimeScale::Hours)
        }
    }

    /// Total magnitude in hours, saturating at `f64::MAX`.
    #[must_use]
    pub const fn hours(&self) -> Quantity {
        Quantity::clamped(self.time_unit.value() * self.time_scale.hours())
    }

    /// Encodes into a backend window.
    #[must_use]
    pub const fn to_window(&self, encoding: WindowEncoding) -> TimeWindow {
        let hours = self.hours();
        match (encoding, self.occurrence) {
            (WindowEncoding::Legacy, _) => TimeWindow {
                start_before_hours: Quantity::ZERO,
                end_after_hours: Quantity::ZERO,
            },
            (WindowEncoding::Corrected, Direction::Before) => TimeWindow {
                start_before_hours: hours,
                end_after_hours: Quantity::ZERO,
            },
            (WindowEncoding::Corrected, Direction::After) => TimeWindow {
                start_before_hours: Quantity::ZERO,
                end_after_hours: hours,
            },
        }
    }
}

/// Encodes an optional occurrence; a missing one is the empty window.
#[must_use]
pub fn encode_window(occurrence: Option<&EventOccurrence>, encoding: WindowEncoding) -> TimeWindow {
    occurrence.map_or_else(TimeWindow::default, |occ| occ.to_window(encoding))
}
