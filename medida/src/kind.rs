//! Measurement types
//!
//! Units of the same type are mutually convertible by scalar factor.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::UnitError;

/// Partition of the catalog into directly convertible groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureKind {
    #[serde(rename = "Cantidad")]
    Count,
    #[serde(rename = "Peso")]
    Mass,
    #[serde(rename = "Distancia")]
    Length,
    #[serde(rename = "Superficie")]
    Area,
    #[serde(rename = "Volumen")]
    Volume,
}

impl MeasureKind {
    pub const ALL: [MeasureKind; 5] = [
        MeasureKind::Count,
        MeasureKind::Mass,
        MeasureKind::Length,
        MeasureKind::Area,
        MeasureKind::Volume,
    ];

    /// Catalog tag (e.g. "Peso")
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureKind::Count => "Cantidad",
            MeasureKind::Mass => "Peso",
            MeasureKind::Length => "Distancia",
            MeasureKind::Area => "Superficie",
            MeasureKind::Volume => "Volumen",
        }
    }
}

impl FromStr for MeasureKind {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasureKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnitError::UnsupportedType(s.to_string()))
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
