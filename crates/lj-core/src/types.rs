//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A quantity was negative, NaN or infinite.
    #[error("quantity must be a finite non-negative number, got {value}")]
    InvalidQuantity { value: f64 },

    /// A string did not name any variant of a closed set.
    #[error("invalid {field}: {value}")]
    UnknownVariant { field: &'static str, value: String },
}

/// An opaque identifier for a join node in the editable tree.
///
/// Identifiers only key UI list rendering. They are never part of the
/// business data and are regenerated whenever a node is built from
/// backend records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JoinId(String);

impl JoinId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "join ID" });
        }
        Ok(Self(id))
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JoinId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JoinId> for String {
    fn from(id: JoinId) -> Self {
        id.0
    }
}

impl fmt::Display for JoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for JoinId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates `as_str`, `Display` and `FromStr` for a closed string enum.
macro_rules! impl_str_enum {
    ($name:ident, $field_name:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Wire representation of the variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ValidationError::UnknownVariant {
                        field: $field_name,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Cardinality of a join between a source and a target logrepo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// Each source record matches at most one target record.
    #[default]
    #[serde(rename = "1-to-1")]
    OneToOne,
    /// Each source record may match many target records.
    #[serde(rename = "1-to-n")]
    OneToMany,
}

impl_str_enum!(Relationship, "relationship", {
    OneToOne => "1-to-1",
    OneToMany => "1-to-n",
});

impl Relationship {
    /// Maps the backend `oneToOne` flag.
    #[must_use]
    pub const fn from_one_to_one(one_to_one: bool) -> Self {
        if one_to_one {
            Self::OneToOne
        } else {
            Self::OneToMany
        }
    }

    /// Returns the backend `oneToOne` flag.
    #[must_use]
    pub const fn is_one_to_one(self) -> bool {
        matches!(self, Self::OneToOne)
    }
}

/// Whether the target event must happen before or after the source event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Before,
    After,
}

impl_str_enum!(Direction, "occurrence", {
    Before => "before",
    After => "after",
});

/// Unit the occurrence magnitude is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Hours,
    Days,
}

impl_str_enum!(TimeScale, "time scale", {
    Hours => "hours",
    Days => "days",
});

impl TimeScale {
    /// Number of hours in one unit of this scale.
    #[must_use]
    pub const fn hours(self) -> f64 {
        match self {
            Self::Hours => 1.0,
            Self::Days => 24.0,
        }
    }
}

/// Largest integer `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A finite, non-negative amount of time: a number of hours or of days.
///
/// Fractional values are accepted. Whole values serialize as JSON integers,
/// so integer windows keep their `48` rather than `48.0` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a quantity after validation.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidQuantity { value });
        }
        Ok(Self(value))
    }

    /// Creates a quantity, clamping into range.
    ///
    /// NaN and negative values become 0.0. Positive infinity becomes
    /// `f64::MAX`.
    #[must_use]
    pub const fn clamped(value: f64) -> Self {
        if value.is_nan() || value < 0.0 {
            Self(0.0)
        } else if value.is_infinite() {
            Self(f64::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the inner f64 value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the quantity is greater than zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "only reached for non-negative integers below 2^53"
    )]
    fn as_exact_integer(self) -> Option<u64> {
        if self.0.fract() == 0.0 && self.0 <= MAX_EXACT_INTEGER {
            Some(self.0 as u64)
        } else {
            None
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for f64 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.as_exact_integer() {
            Some(whole) => serializer.serialize_u64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        // Clamp on deserialization to be lenient with external data
        Ok(Self::clamped(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_id_rejects_empty() {
        assert!(JoinId::new("").is_err());
        assert!(JoinId::new("abc").is_ok());
    }

    #[test]
    fn join_id_serde_rejects_empty() {
        let result: Result<JoinId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn generated_ids_are_distinct_and_non_empty() {
        let a = JoinId::generate();
        let b = JoinId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn relationship_serializes_as_cardinality() {
        assert_eq!(
            serde_json::to_string(&Relationship::OneToOne).unwrap(),
            "\"1-to-1\""
        );
        assert_eq!(
            serde_json::to_string(&Relationship::OneToMany).unwrap(),
            "\"1-to-n\""
        );
        let parsed: Relationship = serde_json::from_str("\"1-to-n\"").unwrap();
        assert_eq!(parsed, Relationship::OneToMany);
    }

    #[test]
    fn relationship_maps_backend_flag() {
        assert_eq!(Relationship::from_one_to_one(true), Relationship::OneToOne);
        assert_eq!(Relationship::from_one_to_one(false), Relationship::OneToMany);
        assert!(Relationship::OneToOne.is_one_to_one());
        assert!(!Relationship::OneToMany.is_one_to_one());
    }

    #[test]
    fn enums_parse_from_wire_strings() {
        assert_eq!("before".parse::<Direction>().unwrap(), Direction::Before);
        assert_eq!("days".parse::<TimeScale>().unwrap(), TimeScale::Days);
        assert_eq!("1-to-1".parse::<Relationship>().unwrap(), Relationship::OneToOne);

        let err = "weeks".parse::<TimeScale>().unwrap_err();
        assert_eq!(err.to_string(), "invalid time scale: weeks");
    }

    #[test]
    fn time_scale_hours() {
        assert_eq!(Quantity::clamped(TimeScale::Hours.hours()), Quantity::from(1));
        assert_eq!(Quantity::clamped(TimeScale::Days.hours()), Quantity::from(24));
    }

    #[test]
    fn quantity_validates_range() {
        assert!(Quantity::new(0.0).is_ok());
        assert!(Quantity::new(1.5).is_ok());
        assert!(Quantity::new(-0.5).is_err());
        assert!(Quantity::new(f64::NAN).is_err());
        assert!(Quantity::new(f64::INFINITY).is_err());
    }

    #[test]
    fn quantity_clamped_handles_edge_cases() {
        assert_eq!(Quantity::clamped(-3.0), Quantity::ZERO);
        assert_eq!(Quantity::clamped(f64::NAN), Quantity::ZERO);
        assert_eq!(Quantity::clamped(f64::INFINITY), Quantity::clamped(f64::MAX));
        assert_eq!(Quantity::clamped(2.5), Quantity::new(2.5).unwrap());
    }

    #[test]
    fn quantity_serializes_whole_values_as_integers() {
        assert_eq!(serde_json::to_string(&Quantity::from(48)).unwrap(), "48");
        assert_eq!(serde_json::to_string(&Quantity::ZERO).unwrap(), "0");
        assert_eq!(
            serde_json::to_string(&Quantity::clamped(1.5)).unwrap(),
            "1.5"
        );
    }

    #[test]
    fn quantity_deserializes_integers_and_fractions() {
        let whole: Quantity = serde_json::from_str("48").unwrap();
        assert_eq!(whole, Quantity::from(48));

        let fraction: Quantity = serde_json::from_str("1.5").unwrap();
        assert_eq!(fraction, Quantity::clamped(1.5));

        let negative: Quantity = serde_json::from_str("-2").unwrap();
        assert_eq!(negative, Quantity::ZERO);
    }
}
